//! Snapshot persistence: the whole application state lives as one JSON
//! blob under a fixed key, replaced on every change.

use crate::errors::AppResult;
use crate::models::app_state::AppState;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub const STORAGE_KEY: &str = "sitecontrol_v2_data";

pub fn load_state(conn: &Connection) -> AppResult<Option<AppState>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM storage WHERE key = ?1",
            [STORAGE_KEY],
            |row| row.get(0),
        )
        .optional()?;

    match raw {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Stored snapshot, or the seeded initial state with the default owner.
pub fn load_or_seed(conn: &Connection) -> AppResult<AppState> {
    Ok(load_state(conn)?.unwrap_or_default())
}

pub fn save_state(conn: &Connection, state: &AppState) -> AppResult<()> {
    let json = serde_json::to_string(state)?;
    conn.execute(
        "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![STORAGE_KEY, json, Local::now().to_rfc3339()],
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;
    use crate::errors::AppError;
    use crate::models::machine::Machine;

    #[test]
    fn empty_store_seeds_default_owner() {
        let pool = DbPool::in_memory().unwrap();
        assert!(load_state(&pool.conn).unwrap().is_none());
        let state = load_or_seed(&pool.conn).unwrap();
        assert_eq!(state.users[0].id, "owner-1");
    }

    #[test]
    fn saved_snapshot_replaces_previous() {
        let pool = DbPool::in_memory().unwrap();
        let mut state = AppState::default();
        save_state(&pool.conn, &state).unwrap();

        state.machines.push(Machine {
            id: "mac-1".into(),
            name: "Excavator".into(),
            supervisor_id: "sup".into(),
            date_added: 0,
        });
        save_state(&pool.conn, &state).unwrap();

        let loaded = load_state(&pool.conn).unwrap().unwrap();
        assert_eq!(loaded, state);

        let rows: i64 = pool
            .conn
            .query_row("SELECT COUNT(*) FROM storage", [], |r| r.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn malformed_blob_is_an_error() {
        let pool = DbPool::in_memory().unwrap();
        pool.conn
            .execute(
                "INSERT INTO storage (key, value, updated_at) VALUES (?1, '{not json', '')",
                [STORAGE_KEY],
            )
            .unwrap();
        assert!(matches!(load_state(&pool.conn), Err(AppError::Json(_))));
    }
}
