//! Schema creation and upgrades for the `logs` table.
//! Migrations are idempotent: every run probes the live schema and applies
//! only what is missing.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result};

/// Check if the `logs` table exists.
fn logs_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='logs'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `logs` table has a `subject` column.
fn logs_has_subject_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('logs')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "subject" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `logs` table with the modern schema (including `subject`).
fn create_logs_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS logs (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            subject TEXT NOT NULL DEFAULT 'default',
            action  TEXT NOT NULL
                    CHECK(action IN ('Clock In','Clock Out','Break Start','Break End')),
            time    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_logs_subject_id ON logs(subject, id);
        CREATE INDEX IF NOT EXISTS idx_logs_subject_time ON logs(subject, time);
        "#,
    )?;
    Ok(())
}

/// Migrate a legacy single-subject `logs` table to the keyed schema.
/// Legacy rows all belonged to the implicit default subject.
fn migrate_add_subject_to_logs(conn: &Connection) -> Result<()> {
    if !logs_table_exists(conn)? {
        return Ok(());
    }

    if logs_has_subject_column(conn)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        BEGIN;

        ALTER TABLE logs ADD COLUMN subject TEXT NOT NULL DEFAULT 'default';

        CREATE INDEX IF NOT EXISTS idx_logs_subject_id ON logs(subject, id);
        CREATE INDEX IF NOT EXISTS idx_logs_subject_time ON logs(subject, time);

        COMMIT;
        "#,
    )?;
    Ok(())
}

/// Run all pending migrations against an open connection.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    migrate_add_subject_to_logs(conn)
        .map_err(|e| AppError::Migration(format!("add subject column: {e}")))?;
    create_logs_table(conn).map_err(|e| AppError::Migration(format!("create logs table: {e}")))?;
    Ok(())
}
