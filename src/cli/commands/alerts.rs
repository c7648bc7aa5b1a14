use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::alerts::visible_to;
use crate::core::auth::current_user;
use crate::core::workspace::Workspace;
use crate::errors::AppResult;
use crate::ui::messages::{header, success};
use crate::utils::colors::{color_for_severity, paint};
use crate::utils::date::fmt_timestamp;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Alerts { json } = cmd {
        let mut ws = Workspace::open(cfg)?;
        let user = current_user(&ws.state)?.clone();
        ws.sync_alerts()?;

        let alerts = visible_to(&ws.state, &user);

        if *json {
            println!("{}", serde_json::to_string_pretty(&alerts)?);
            return Ok(());
        }

        if alerts.is_empty() {
            success("No active alerts.");
            return Ok(());
        }

        header(format!("{} active alerts", alerts.len()));
        for a in alerts {
            println!(
                "[{}] {:<20} {}\n    id: {}  at {}",
                paint(a.severity.as_str(), color_for_severity(a.severity)),
                a.kind.as_str(),
                a.message,
                a.id,
                fmt_timestamp(a.timestamp)
            );
        }
    }

    Ok(())
}
