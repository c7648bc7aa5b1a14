//! Unified application error type.
//! All modules (db, core, cli, export) return AppError so that the
//! binary can print a single consistent message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Snapshot error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Session
    // ---------------------------
    #[error("Account not found")]
    AccountNotFound,

    #[error("Your account is deactivated. Contact Owner.")]
    AccountInactive,

    #[error("Invalid PIN code")]
    InvalidPin,

    #[error("Not logged in. Run `sitecontrol login` first.")]
    NotLoggedIn,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    // ---------------------------
    // Input
    // ---------------------------
    #[error("PIN must be exactly 4 digits")]
    PinFormat,

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid photo: {0}")]
    InvalidPhoto(String),

    // ---------------------------
    // Lookups
    // ---------------------------
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Machine not found: {0}")]
    MachineNotFound(String),

    #[error("Spare tool category not found: {0}")]
    CategoryNotFound(String),

    #[error("Spare tool item not found: {0}")]
    ItemNotFound(String),

    #[error("Alert not found: {0}")]
    AlertNotFound(String),

    // ---------------------------
    // Config
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export / notify
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Owner phone number not found for notification.")]
    OwnerPhoneMissing,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
