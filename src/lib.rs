//! SiteControl library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind it: snapshot store, alert rules, site operations, report export
//! and notification links.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod notify;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Login { .. } | Commands::Logout | Commands::Whoami => {
            commands::session::handle(&cli.command, cfg)
        }
        Commands::Dashboard => commands::dashboard::handle(cfg),
        Commands::User(cmd) => commands::user::handle(cmd, cfg),
        Commands::Machine(cmd) => commands::machine::handle(cmd, cfg),
        Commands::Log(cmd) => commands::log::handle(cmd, cfg),
        Commands::Tools(cmd) => commands::tools::handle(cmd, cfg),
        Commands::Alerts { .. } => commands::alerts::handle(&cli.command, cfg),
        Commands::Notify { .. } => commands::notify::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
        Commands::Audit { .. } => commands::audit::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and shared by every handler
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_database(Some(custom_db))
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
