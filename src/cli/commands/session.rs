use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth;
use crate::core::workspace::Workspace;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut ws = Workspace::open(cfg)?;

    match cmd {
        Commands::Login { username, pin } => {
            let user = auth::login(&mut ws.state, username, pin)?;
            ws.commit("login", &user.id, &format!("{} signed in", user.username))?;
            success(format!(
                "Signed in as {} ({})",
                user.name,
                user.role.as_str()
            ));
        }
        Commands::Logout => match auth::logout(&mut ws.state) {
            Some(user) => {
                ws.commit("logout", &user.id, &format!("{} signed out", user.username))?;
                success("Signed out.");
            }
            None => info("No active session."),
        },
        Commands::Whoami => {
            let user = auth::current_user(&ws.state)?;
            println!("{} ({}) - {}", user.name, user.username, user.role.as_str());
        }
        _ => {}
    }

    Ok(())
}
