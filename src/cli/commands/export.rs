use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::require_owner;
use crate::core::workspace::Workspace;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::notify::{open_link, report_link};
use crate::ui::messages::{link, success};
use crate::utils::path::{expand_tilde, report_file};
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
        notify,
        open,
    } = cmd
    {
        let mut ws = Workspace::open(cfg)?;
        require_owner(&ws.state)?;
        ws.sync_alerts()?;

        let today = ws.today();
        let path: PathBuf = match file {
            Some(f) => expand_tilde(f),
            None => report_file(&expand_tilde(&cfg.export_dir), today, format.as_str()),
        };

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                path.display()
            )));
        }

        ExportLogic::export(&ws.state, *format, &path, *force)?;

        if *notify && let Some(url) = report_link(&ws.state, today) {
            link(&url);
            if *open || cfg.open_links {
                open_link(&url)?;
            }
        }

        ws.commit(
            "export",
            &path.to_string_lossy(),
            &format!("Report exported as {}", format.as_str()),
        )?;
        success(format!("Report \"{}\" generated!", path.display()));
    }

    Ok(())
}
