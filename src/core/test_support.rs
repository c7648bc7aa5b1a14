use crate::models::app_state::AppState;
use crate::models::user::{User, UserRole, UserStatus};

/// Snapshot with one supervisor (`sup-1`, "Sam Site") logged in.
pub fn supervisor_session() -> AppState {
    let supervisor = User {
        id: "sup-1".into(),
        name: "Sam Site".into(),
        username: "sam".into(),
        pin: "1234".into(),
        role: UserRole::Supervisor,
        phone: None,
        status: UserStatus::Active,
    };
    let mut state = AppState::default();
    state.users.push(supervisor.clone());
    state.current_user = Some(supervisor);
    state
}
