use crate::config::Config;
use crate::config::check::missing_fields;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Open the config file in `editor`, falling back to $EDITOR / $VISUAL
    /// and finally the platform default.
    pub fn edit(editor: &Option<String>) -> AppResult<()> {
        let path = Config::config_file();
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist; run `sitecontrol init` first",
                path.display()
            )));
        }

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&requested).arg(&path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration edited using '{}'", requested));
                Ok(())
            }
            _ if requested != default_editor => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    requested, default_editor
                ));
                Command::new(&default_editor)
                    .arg(&path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))
                    .and_then(|s| {
                        if s.success() {
                            Ok(())
                        } else {
                            Err(AppError::Config(format!("'{}' exited with {}", default_editor, s)))
                        }
                    })
            }
            Ok(s) => Err(AppError::Config(format!("'{}' exited with {}", requested, s))),
            Err(e) => Err(AppError::Config(e.to_string())),
        }
    }

    pub fn check() -> AppResult<()> {
        let path = Config::config_file();
        if !path.exists() {
            warning(format!(
                "No configuration file at {} (defaults are in use)",
                path.display()
            ));
            return Ok(());
        }

        let missing = missing_fields(&path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            for field in missing {
                warning(format!("Missing field '{}' (default value will be used)", field));
            }
        }
        Ok(())
    }
}
