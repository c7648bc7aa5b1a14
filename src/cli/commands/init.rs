use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::db::store::{load_state, save_state};
use crate::errors::AppResult;
use crate::models::app_state::AppState;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite store with all pending migrations
///  - the seeded snapshot with the default owner account
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    info("Initializing SiteControl…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &cfg.database);

    let pool = DbPool::open(&cfg.database)?;
    println!(
        "🧩 Schema     : {}",
        applied_versions(&pool.conn)?.join(", ")
    );

    if load_state(&pool.conn)?.is_none() {
        save_state(&pool.conn, &AppState::default())?;
        success("Seeded default owner account (username 'owner', PIN 8888).");
    } else {
        info("Existing site data kept.");
    }

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success("SiteControl initialization completed!");
    Ok(())
}
