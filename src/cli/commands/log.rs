use crate::cli::parser::LogCommands;
use crate::config::Config;
use crate::core::auth::current_user;
use crate::core::daily_log::{self, LogInput};
use crate::core::photo;
use crate::core::workspace::Workspace;
use crate::errors::{AppError, AppResult};
use crate::models::daily_log::DailyLog;
use crate::ui::messages::{info, success};
use crate::utils::date::{self, now_millis};
use crate::utils::fmt_number;
use crate::utils::formatting::{truncate, yes_no};
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;

pub fn handle(cmd: &LogCommands, cfg: &Config) -> AppResult<()> {
    let mut ws = Workspace::open(cfg)?;

    match cmd {
        LogCommands::Add {
            machine,
            fuel,
            hours,
            date: date_str,
            notes,
            photo: photo_path,
        } => {
            let entry_date = match date_str {
                Some(s) => {
                    Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?)
                }
                None => None,
            };

            let photo_url = match photo_path {
                Some(p) => Some(photo::encode_file(&expand_tilde(p))?),
                None => None,
            };

            let today = ws.today();
            let log = daily_log::add_log(
                &mut ws.state,
                LogInput {
                    machine_id: machine.clone(),
                    fuel: fuel.clone(),
                    hours: hours.clone(),
                    date: entry_date,
                    notes: notes.clone(),
                    photo_url,
                },
                today,
                now_millis(),
            )?;

            ws.commit(
                "log_add",
                &log.id,
                &format!(
                    "{} on {}: {}L, {}h",
                    log.machine_name,
                    log.date,
                    fmt_number(log.fuel_used),
                    fmt_number(log.hours_worked)
                ),
            )?;
            success(format!("Log entry saved successfully! (id {})", log.id));
        }

        LogCommands::List { machine } => {
            let user = current_user(&ws.state)?.clone();

            let mut table = Table::with_headers(&[
                "ID", "Date", "Machine", "Fuel (L)", "Hours", "Supervisor", "Photo", "Notes",
            ]);
            let visible: Box<dyn Iterator<Item = &DailyLog>> = if user.is_owner() {
                Box::new(ws.state.logs.iter())
            } else {
                Box::new(ws.state.logs_of(&user.id))
            };
            for l in visible {
                if machine.as_ref().is_some_and(|m| *m != l.machine_id) {
                    continue;
                }
                table.add_row(vec![
                    l.id.clone(),
                    l.date.clone(),
                    l.machine_name.clone(),
                    fmt_number(l.fuel_used),
                    fmt_number(l.hours_worked),
                    l.supervisor_name.clone(),
                    yes_no(l.has_photo()).to_string(),
                    truncate(&l.notes, 40),
                ]);
            }

            if table.is_empty() {
                info("No log entries.");
            } else {
                print!("{}", table.render(&cfg.separator_char));
            }
        }
    }

    Ok(())
}
