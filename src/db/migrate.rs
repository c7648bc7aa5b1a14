use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, params};

/// Ensure that the `log` table exists. Applied migrations are journaled
/// in it, so it has to come first.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

/// Key/value table holding the snapshot blob.
fn create_storage_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS storage (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
}

fn index_log_operation(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation);")
}

type MigrationFn = fn(&Connection) -> rusqlite::Result<()>;

/// Ordered list of schema migrations: (version, description, step).
const MIGRATIONS: &[(&str, &str, MigrationFn)] = &[
    ("0.1.0-storage", "Created storage table", create_storage_table),
    ("0.2.0-log-index", "Indexed log by operation", index_log_operation),
];

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT id FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
            [version],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for (version, description, step) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        step(conn).map_err(|e| AppError::Migration(format!("{version}: {e}")))?;

        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, 'migration_applied', ?2, ?3)",
            params![chrono::Local::now().to_rfc3339(), version, description],
        )?;
    }

    Ok(())
}

/// Versions already recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
