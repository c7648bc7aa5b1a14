//! Owner-side account administration.

use crate::core::auth::require_owner;
use crate::errors::{AppError, AppResult};
use crate::models::app_state::AppState;
use crate::models::user::{User, UserRole, UserStatus};
use crate::utils::ids;
use crate::utils::input::sanitize_pin;

#[derive(Debug, Clone, Default)]
pub struct NewSupervisor {
    pub name: String,
    pub username: String,
    pub pin: String,
    pub phone: Option<String>,
}

pub fn create_supervisor(state: &mut AppState, input: NewSupervisor) -> AppResult<User> {
    require_owner(state)?;

    let name = input.name.trim();
    let username = input.username.trim();
    // same digits-only, four-character input as the login form
    let pin = sanitize_pin(&input.pin);

    if name.is_empty() {
        return Err(AppError::MissingField("name"));
    }
    if username.is_empty() {
        return Err(AppError::MissingField("username"));
    }
    if pin.is_empty() {
        return Err(AppError::MissingField("pin"));
    }
    if pin.len() != 4 {
        return Err(AppError::PinFormat);
    }

    let user = User {
        id: ids::user_id(),
        name: name.to_string(),
        username: username.to_string(),
        pin,
        role: UserRole::Supervisor,
        phone: input
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty()),
        status: UserStatus::Active,
    };

    state.users.push(user.clone());
    Ok(user)
}

/// Find a supervisor account the owner is allowed to manage.
fn managed_user_mut<'a>(state: &'a mut AppState, id: &str) -> AppResult<&'a mut User> {
    let user = state
        .users
        .iter_mut()
        .find(|u| u.id == id)
        .ok_or_else(|| AppError::UserNotFound(id.to_string()))?;

    if user.is_owner() {
        return Err(AppError::PermissionDenied(
            "owner accounts cannot be modified from the dashboard".into(),
        ));
    }
    Ok(user)
}

pub fn set_status(state: &mut AppState, id: &str, status: UserStatus) -> AppResult<User> {
    require_owner(state)?;
    let user = managed_user_mut(state, id)?;
    user.status = status;
    Ok(user.clone())
}

pub fn toggle_status(state: &mut AppState, id: &str) -> AppResult<User> {
    require_owner(state)?;
    let user = managed_user_mut(state, id)?;
    user.status = user.status.toggled();
    Ok(user.clone())
}

/// Remove an account. Machines, logs and tools it owned are kept.
pub fn delete_user(state: &mut AppState, id: &str) -> AppResult<User> {
    require_owner(state)?;
    let removed = managed_user_mut(state, id)?.clone();
    state.users.retain(|u| u.id != id);
    Ok(removed)
}

pub fn supervisors(state: &AppState) -> Vec<&User> {
    state
        .users
        .iter()
        .filter(|u| u.role == UserRole::Supervisor)
        .collect()
}
