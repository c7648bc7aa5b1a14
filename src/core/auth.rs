//! PIN login and role guards.

use crate::errors::{AppError, AppResult};
use crate::models::app_state::AppState;
use crate::models::user::{User, UserRole};
use crate::utils::input::sanitize_pin;

/// Look the account up (case-insensitive, first match) and check its PIN.
/// On success the account becomes the session user.
pub fn login(state: &mut AppState, username: &str, pin: &str) -> AppResult<User> {
    let wanted = username.trim().to_lowercase();
    let user = state
        .users
        .iter()
        .find(|u| u.username.to_lowercase() == wanted)
        .ok_or(AppError::AccountNotFound)?;

    if !user.is_active() {
        return Err(AppError::AccountInactive);
    }

    if user.pin != sanitize_pin(pin) {
        return Err(AppError::InvalidPin);
    }

    let user = user.clone();
    state.current_user = Some(user.clone());
    Ok(user)
}

/// Clear the session. Returns the user that was logged in, if any.
pub fn logout(state: &mut AppState) -> Option<User> {
    state.current_user.take()
}

pub fn current_user(state: &AppState) -> AppResult<&User> {
    state.current_user.as_ref().ok_or(AppError::NotLoggedIn)
}

fn require_role(state: &AppState, role: UserRole) -> AppResult<User> {
    let user = current_user(state)?;
    if user.role != role {
        return Err(AppError::PermissionDenied(format!(
            "this action requires the {} role (logged in as {})",
            role.as_str(),
            user.role.as_str()
        )));
    }
    Ok(user.clone())
}

pub fn require_owner(state: &AppState) -> AppResult<User> {
    require_role(state, UserRole::Owner)
}

pub fn require_supervisor(state: &AppState) -> AppResult<User> {
    require_role(state, UserRole::Supervisor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserStatus;

    fn with_supervisor(status: UserStatus) -> AppState {
        let mut state = AppState::default();
        state.users.push(User {
            id: "s1".into(),
            name: "Sam Site".into(),
            username: "Sam.Site".into(),
            pin: "1234".into(),
            role: UserRole::Supervisor,
            phone: None,
            status,
        });
        state
    }

    #[test]
    fn default_owner_can_log_in() {
        let mut state = AppState::default();
        let user = login(&mut state, "owner", "8888").unwrap();
        assert_eq!(user.id, "owner-1");
        assert_eq!(state.current_user.as_ref().map(|u| u.id.as_str()), Some("owner-1"));
    }

    #[test]
    fn username_match_ignores_case() {
        let mut state = with_supervisor(UserStatus::Active);
        assert!(login(&mut state, "sam.site", "1234").is_ok());
        assert!(login(&mut state, "SAM.SITE", "1234").is_ok());
    }

    #[test]
    fn unknown_account() {
        let mut state = AppState::default();
        let err = login(&mut state, "nobody", "8888").unwrap_err();
        assert_eq!(err.to_string(), "Account not found");
        assert!(state.current_user.is_none());
    }

    #[test]
    fn inactive_account_is_rejected_before_pin_check() {
        let mut state = with_supervisor(UserStatus::Inactive);
        let err = login(&mut state, "sam.site", "0000").unwrap_err();
        assert_eq!(err.to_string(), "Your account is deactivated. Contact Owner.");
    }

    #[test]
    fn wrong_pin() {
        let mut state = AppState::default();
        let err = login(&mut state, "owner", "1111").unwrap_err();
        assert_eq!(err.to_string(), "Invalid PIN code");
    }

    #[test]
    fn pin_input_is_sanitized() {
        let mut state = AppState::default();
        assert!(login(&mut state, "owner", "8-8-8-8").is_ok());
        assert!(login(&mut state, "owner", "88889").is_ok());
    }

    #[test]
    fn guards_check_role() {
        let mut state = with_supervisor(UserStatus::Active);
        assert!(matches!(require_owner(&state), Err(AppError::NotLoggedIn)));

        login(&mut state, "sam.site", "1234").unwrap();
        assert!(require_supervisor(&state).is_ok());
        assert!(matches!(
            require_owner(&state),
            Err(AppError::PermissionDenied(_))
        ));

        assert_eq!(logout(&mut state).map(|u| u.id), Some("s1".to_string()));
        assert!(state.current_user.is_none());
    }
}
