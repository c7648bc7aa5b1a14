use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::require_owner;
use crate::core::workspace::Workspace;
use crate::errors::AppResult;
use crate::notify::{alert_link, open_link};
use crate::ui::messages::{link, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notify { alert, open } = cmd {
        let mut ws = Workspace::open(cfg)?;
        require_owner(&ws.state)?;
        ws.sync_alerts()?;

        let url = alert_link(&ws.state, alert)?;
        link(&url);

        if *open || cfg.open_links {
            open_link(&url)?;
            success("Notification link opened.");
        }

        ws.commit("notify", alert, "Alert notification link generated")?;
    }

    Ok(())
}
