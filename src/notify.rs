//! Messaging deep links.
//!
//! Nothing is sent from here: a prefilled `wa.me` link is built, printed and
//! optionally handed to the platform opener. There is no delivery
//! confirmation.

use crate::errors::{AppError, AppResult};
use crate::models::alert::Alert;
use crate::models::app_state::AppState;
use crate::utils::date::fmt_time_of_day;
use crate::utils::input::digits_only;
use chrono::NaiveDate;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::process::Command;

/// Characters `encodeURIComponent` leaves untouched besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn whatsapp_link(phone: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        digits_only(phone),
        utf8_percent_encode(message, URI_COMPONENT)
    )
}

pub fn report_message(day: NaiveDate, active_alerts: usize) -> String {
    let mut msg = format!(
        "SITECONTROL REPORT: Daily Site Report for {} is ready.",
        day.format("%Y-%m-%d")
    );
    if active_alerts > 0 {
        msg.push_str(&format!(
            "\n\nURGENT: There are {} active alerts requiring attention.",
            active_alerts
        ));
    }
    msg
}

pub fn alert_message(alert: &Alert) -> String {
    format!(
        "SITECONTROL ALERT: {} (Triggered: {})",
        alert.message,
        fmt_time_of_day(alert.timestamp)
    )
}

/// Phone of the first owner account, if one is set.
pub fn owner_phone(state: &AppState) -> Option<&str> {
    state
        .owner()
        .and_then(|o| o.phone.as_deref())
        .filter(|p| !p.trim().is_empty())
}

/// Link notifying the owner about one stored alert.
pub fn alert_link(state: &AppState, alert_id: &str) -> AppResult<String> {
    let alert = state
        .alerts
        .iter()
        .find(|a| a.id == alert_id)
        .ok_or_else(|| AppError::AlertNotFound(alert_id.to_string()))?;
    let phone = owner_phone(state).ok_or(AppError::OwnerPhoneMissing)?;
    Ok(whatsapp_link(phone, &alert_message(alert)))
}

/// Link announcing a freshly exported report; `None` when the owner has no
/// phone on file.
pub fn report_link(state: &AppState, day: NaiveDate) -> Option<String> {
    owner_phone(state).map(|phone| whatsapp_link(phone, &report_message(day, state.alerts.len())))
}

/// Hand `url` to the platform opener.
pub fn open_link(url: &str) -> AppResult<()> {
    let status = if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", "", url]).status()
    } else if cfg!(target_os = "macos") {
        Command::new("open").arg(url).status()
    } else {
        Command::new("xdg-open").arg(url).status()
    };

    match status {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(AppError::Other(format!("link opener exited with {}", s))),
        Err(e) => Err(AppError::Io(e)),
    }
}
