/// ANSI color helper utilities for terminal output.
use crate::models::alert::Severity;
use crate::models::user::UserStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Quantity color:
/// \<0 → red
/// 0 → grey
/// \>0 → reset
pub fn color_for_quantity(value: i64) -> &'static str {
    if value < 0 {
        RED
    } else if value == 0 {
        GREY
    } else {
        RESET
    }
}

pub fn color_for_severity(severity: Severity) -> &'static str {
    match severity {
        Severity::High => RED,
        Severity::Medium => YELLOW,
    }
}

pub fn color_for_status(status: UserStatus) -> &'static str {
    match status {
        UserStatus::Active => GREEN,
        UserStatus::Inactive => RED,
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
