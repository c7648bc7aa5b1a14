use crate::cli::parser::UserCommands;
use crate::config::Config;
use crate::core::auth::require_owner;
use crate::core::users::{self, NewSupervisor};
use crate::core::workspace::Workspace;
use crate::errors::{AppError, AppResult};
use crate::models::user::UserStatus;
use crate::ui::messages::{info, success};
use crate::utils::colors::{color_for_status, paint};
use crate::utils::formatting::mask_pin;
use crate::utils::table::Table;

pub fn handle(cmd: &UserCommands, cfg: &Config) -> AppResult<()> {
    let mut ws = Workspace::open(cfg)?;

    match cmd {
        UserCommands::Add {
            name,
            username,
            pin,
            phone,
        } => {
            let user = users::create_supervisor(
                &mut ws.state,
                NewSupervisor {
                    name: name.clone(),
                    username: username.clone(),
                    pin: pin.clone(),
                    phone: phone.clone(),
                },
            )?;
            ws.commit("user_add", &user.id, &format!("Created supervisor {}", user.username))?;
            success(format!("Supervisor '{}' created with id {}", user.name, user.id));
        }

        UserCommands::List { show_pins } => {
            require_owner(&ws.state)?;
            let sups = users::supervisors(&ws.state);
            if sups.is_empty() {
                info("No supervisors yet. Add one with `sitecontrol user add`.");
                return Ok(());
            }

            let mut table = Table::with_headers(&["ID", "Name", "Username", "PIN", "Phone", "Status"]);
            for u in sups {
                table.add_row(vec![
                    u.id.clone(),
                    u.name.clone(),
                    u.username.clone(),
                    if *show_pins { u.pin.clone() } else { mask_pin(&u.pin) },
                    u.phone.clone().unwrap_or_else(|| "-".into()),
                    u.status.as_str().to_string(),
                ]);
            }
            print!("{}", colorize_status(&table.render(&cfg.separator_char)));
        }

        UserCommands::Toggle { id } => {
            let user = users::toggle_status(&mut ws.state, id)?;
            ws.commit("user_status", &user.id, &format!("Status set to {}", user.status.as_str()))?;
            success(format!("{} is now {}", user.name, user.status.as_str()));
        }

        UserCommands::Status { id, status } => {
            let wanted = UserStatus::from_code(status).ok_or_else(|| {
                AppError::Other(format!("Invalid status '{}': use active or inactive", status))
            })?;
            let user = users::set_status(&mut ws.state, id, wanted)?;
            ws.commit("user_status", &user.id, &format!("Status set to {}", user.status.as_str()))?;
            success(format!("{} is now {}", user.name, user.status.as_str()));
        }

        UserCommands::Del { id } => {
            let user = users::delete_user(&mut ws.state, id)?;
            ws.commit("user_del", &user.id, &format!("Deleted account {}", user.username))?;
            success(format!("Account '{}' deleted.", user.username));
        }
    }

    Ok(())
}

/// Colour the status word closing each line of an already-aligned table.
/// Status is the last column, so other cells are never touched.
fn colorize_status(rendered: &str) -> String {
    let mut out = String::with_capacity(rendered.len());
    for line in rendered.lines() {
        let cell = line.trim_end();
        // INACTIVE first: it ends with ACTIVE
        let status = [UserStatus::Inactive, UserStatus::Active]
            .into_iter()
            .find(|st| cell.ends_with(&format!(" {}", st.as_str())));

        match status {
            Some(st) => {
                let prefix = &cell[..cell.len() - st.as_str().len()];
                out.push_str(prefix);
                out.push_str(&paint(st.as_str(), color_for_status(st)));
                out.push_str(&line[cell.len()..]);
            }
            None => out.push_str(line),
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_status_column_is_coloured() {
        let mut table = Table::with_headers(&["Name", "Username", "Status"]);
        table.add_row(vec!["ACTIVE crew".into(), "ACTIVE".into(), "INACTIVE".into()]);
        table.add_row(vec!["Sam".into(), "sam".into(), "ACTIVE".into()]);

        let out = colorize_status(&table.render("-"));
        let lines: Vec<&str> = out.lines().collect();

        let red = paint("INACTIVE", color_for_status(UserStatus::Inactive));
        let green = paint("ACTIVE", color_for_status(UserStatus::Active));
        assert!(lines[2].starts_with("ACTIVE crew ACTIVE   "));
        assert!(lines[2].contains(&red));
        assert_eq!(lines[2].matches("\x1b[").count(), 2);
        assert!(lines[3].contains(&green));
        assert!(!lines[0].contains("\x1b["));
    }
}
