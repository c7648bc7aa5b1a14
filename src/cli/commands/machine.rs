use crate::cli::parser::MachineCommands;
use crate::config::Config;
use crate::core::auth::current_user;
use crate::core::fleet;
use crate::core::workspace::Workspace;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date::fmt_timestamp;
use crate::utils::fmt_number;
use crate::utils::table::Table;

pub fn handle(cmd: &MachineCommands, cfg: &Config) -> AppResult<()> {
    let mut ws = Workspace::open(cfg)?;

    match cmd {
        MachineCommands::Add { name } => {
            let m = fleet::add_machine(&mut ws.state, name, crate::utils::date::now_millis())?;
            ws.commit("machine_add", &m.id, &format!("Registered {}", m.name))?;
            success(format!("Machine '{}' registered with id {}", m.name, m.id));
        }

        MachineCommands::Del { id } => {
            let m = fleet::delete_machine(&mut ws.state, id)?;
            ws.commit("machine_del", &m.id, &format!("Removed {}", m.name))?;
            success(format!("Machine '{}' removed.", m.name));
        }

        MachineCommands::List => {
            let user = current_user(&ws.state)?.clone();

            let mut table = Table::with_headers(&[
                "ID",
                "Name",
                "Supervisor",
                "Added",
                "Logs",
                "Total fuel",
                "Total hours",
                "Last entry",
            ]);
            for entry in fleet::fleet_overview(&ws.state) {
                if !user.is_owner() && entry.machine.supervisor_id != user.id {
                    continue;
                }
                let last = entry
                    .latest
                    .map(|l| {
                        format!(
                            "{} ({}L / {}h)",
                            l.date,
                            fmt_number(l.fuel_used),
                            fmt_number(l.hours_worked)
                        )
                    })
                    .unwrap_or_else(|| "-".into());
                table.add_row(vec![
                    entry.machine.id.clone(),
                    entry.machine.name.clone(),
                    entry.supervisor_name.to_string(),
                    fmt_timestamp(entry.machine.date_added),
                    entry.log_count.to_string(),
                    format!("{:.1}L", entry.total_fuel),
                    format!("{:.1}h", entry.total_hours),
                    last,
                ]);
            }

            if table.is_empty() {
                info("No machines registered.");
            } else {
                print!("{}", table.render(&cfg.separator_char));
            }
        }
    }

    Ok(())
}
