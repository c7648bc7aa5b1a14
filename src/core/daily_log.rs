//! Daily operational entries (fuel, hours, notes, photo) per machine.

use crate::core::auth::require_supervisor;
use crate::errors::{AppError, AppResult};
use crate::models::app_state::AppState;
use crate::models::daily_log::DailyLog;
use crate::utils::date::fmt_date;
use crate::utils::ids;
use crate::utils::input::parse_float_lenient;
use chrono::NaiveDate;

/// Raw form input; numeric fields are coerced on submit.
#[derive(Debug, Clone, Default)]
pub struct LogInput {
    pub machine_id: String,
    pub fuel: String,
    pub hours: String,
    pub date: Option<NaiveDate>,
    pub notes: String,
    /// Already-encoded data URI
    pub photo_url: Option<String>,
}

/// Record a log for one of the session supervisor's machines.
/// The new entry goes to the front of the list.
pub fn add_log(
    state: &mut AppState,
    input: LogInput,
    today: NaiveDate,
    now: i64,
) -> AppResult<DailyLog> {
    let supervisor = require_supervisor(state)?;

    let (machine_id, machine_name) = state
        .machines_of(&supervisor.id)
        .find(|m| m.id == input.machine_id)
        .map(|m| (m.id.clone(), m.name.clone()))
        .ok_or_else(|| AppError::MachineNotFound(input.machine_id.clone()))?;

    if input.fuel.trim().is_empty() {
        return Err(AppError::MissingField("fuel"));
    }
    if input.hours.trim().is_empty() {
        return Err(AppError::MissingField("hours"));
    }

    let log = DailyLog {
        id: ids::log_id(),
        machine_id,
        machine_name,
        timestamp: now,
        date: fmt_date(input.date.unwrap_or(today)),
        fuel_used: parse_float_lenient(&input.fuel),
        hours_worked: parse_float_lenient(&input.hours),
        notes: input.notes,
        photo_url: input.photo_url.filter(|p| !p.is_empty()),
        supervisor_id: supervisor.id,
        supervisor_name: supervisor.name,
    };

    state.logs.insert(0, log.clone());
    Ok(log)
}
