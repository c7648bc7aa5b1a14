//! Load / mutate / save cycle shared by every command.
//!
//! Each invocation opens the store, works on the in-memory snapshot and
//! commits it back as a whole. Committing re-derives alerts (when a user is
//! logged in) and journals the operation.

use crate::config::{Config, DayBasis};
use crate::core::alerts::refresh_alerts;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::store::{load_or_seed, save_state};
use crate::errors::AppResult;
use crate::models::app_state::AppState;
use crate::ui::messages::warning;
use crate::utils::date;
use chrono::NaiveDate;

pub struct Workspace {
    pub pool: DbPool,
    pub state: AppState,
    pub day_basis: DayBasis,
}

impl Workspace {
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let pool = DbPool::open(&cfg.database)?;
        let state = load_or_seed(&pool.conn)?;
        Ok(Self {
            pool,
            state,
            day_basis: cfg.day_basis,
        })
    }

    pub fn today(&self) -> NaiveDate {
        date::today(self.day_basis)
    }

    /// Re-derive alerts for the current session without saving.
    pub fn refresh(&mut self) -> bool {
        let today = self.today();
        refresh_alerts(&mut self.state, today, date::now_millis())
    }

    /// Persist the snapshot and journal `operation`.
    pub fn commit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.refresh();
        save_state(&self.pool.conn, &self.state)?;

        // journal failures never undo the save
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
        Ok(())
    }

    /// Persist only if the alert list changed (read-only commands).
    pub fn sync_alerts(&mut self) -> AppResult<()> {
        if self.refresh() {
            save_state(&self.pool.conn, &self.state)?;
        }
        Ok(())
    }
}
