use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::event::LogEvent;
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::NaiveDateTime;
use rusqlite::{Connection, Result, Row, ToSql, params};

pub fn map_row(row: &Row) -> Result<LogEvent> {
    let action_str: String = row.get("action")?;
    let action = Action::from_db_str(&action_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidAction(action_str.clone())),
        )
    })?;

    let time_str: String = row.get("time")?;
    let time = parse_timestamp(&time_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(time_str.clone())),
        )
    })?;

    Ok(LogEvent {
        id: row.get("id")?,
        subject: row.get("subject")?,
        action,
        time,
    })
}

/// Full ordered history for one subject.
pub fn load_history(conn: &Connection, subject: &str) -> AppResult<Vec<LogEvent>> {
    let mut stmt = conn.prepare(
        "SELECT id, subject, action, time FROM logs
         WHERE subject = ?1
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([subject], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Append one event and return the stored row with its assigned id.
pub fn insert_log(
    conn: &Connection,
    subject: &str,
    action: Action,
    time: NaiveDateTime,
) -> AppResult<LogEvent> {
    conn.execute(
        "INSERT INTO logs (subject, action, time) VALUES (?1, ?2, ?3)",
        params![subject, action.to_db_str(), format_timestamp(&time)],
    )?;

    Ok(LogEvent {
        id: conn.last_insert_rowid() as i32,
        subject: subject.to_string(),
        action,
        time,
    })
}

/// History filtered by inclusive timestamp bounds, ordered by id.
/// Bounds compare against the stored TEXT form, whose lexicographic order
/// matches chronological order.
pub fn load_logs_between(
    conn: &Connection,
    subject: &str,
    from: Option<&str>,
    to: Option<&str>,
) -> AppResult<Vec<LogEvent>> {
    let mut sql = String::from("SELECT id, subject, action, time FROM logs WHERE subject = ?");
    let mut bind: Vec<&dyn ToSql> = vec![&subject];

    if let Some(f) = &from {
        sql.push_str(" AND time >= ?");
        bind.push(f);
    }
    if let Some(t) = &to {
        sql.push_str(" AND time <= ?");
        bind.push(t);
    }
    sql.push_str(" ORDER BY id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(bind), map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
