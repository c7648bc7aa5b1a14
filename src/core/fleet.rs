//! Machine registry kept by supervisors.

use crate::core::auth::require_supervisor;
use crate::errors::{AppError, AppResult};
use crate::models::app_state::AppState;
use crate::models::daily_log::DailyLog;
use crate::models::machine::Machine;
use crate::utils::ids;

pub fn add_machine(state: &mut AppState, name: &str, now: i64) -> AppResult<Machine> {
    let supervisor = require_supervisor(state)?;

    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::MissingField("name"));
    }

    let machine = Machine {
        id: ids::machine_id(),
        name: name.to_string(),
        supervisor_id: supervisor.id,
        date_added: now,
    };
    state.machines.push(machine.clone());
    Ok(machine)
}

/// Remove one of the session supervisor's machines. Its logs stay.
pub fn delete_machine(state: &mut AppState, id: &str) -> AppResult<Machine> {
    let supervisor = require_supervisor(state)?;

    let pos = state
        .machines
        .iter()
        .position(|m| m.id == id && m.supervisor_id == supervisor.id)
        .ok_or_else(|| AppError::MachineNotFound(id.to_string()))?;

    Ok(state.machines.remove(pos))
}

/// Owner fleet overview line: a machine with its log count, latest entry
/// and fuel/hour totals over all its logs.
pub struct FleetEntry<'a> {
    pub machine: &'a Machine,
    pub supervisor_name: &'a str,
    pub log_count: usize,
    pub latest: Option<&'a DailyLog>,
    pub total_fuel: f64,
    pub total_hours: f64,
}

pub fn fleet_overview(state: &AppState) -> Vec<FleetEntry<'_>> {
    state
        .machines
        .iter()
        .map(|m| {
            let logs: Vec<&DailyLog> = state
                .logs
                .iter()
                .filter(|l| l.machine_id == m.id)
                .collect();
            FleetEntry {
                machine: m,
                supervisor_name: state.user_name(&m.supervisor_id).unwrap_or("Unknown"),
                log_count: logs.len(),
                latest: logs.first().copied(),
                total_fuel: logs.iter().map(|l| l.fuel_used).sum(),
                total_hours: logs.iter().map(|l| l.hours_worked).sum(),
            }
        })
        .collect()
}
