use super::action::Action;
use crate::utils::time::{TIMESTAMP_FORMAT, serialize_timestamp};
use chrono::NaiveDateTime;
use serde::Serialize;

/// One accepted punch, as stored in the `logs` table.
/// Rows are append-only: never updated, never deleted. Ordering is by `id`.
#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    pub id: i32,              // ⇔ logs.id (INTEGER PRIMARY KEY AUTOINCREMENT)
    pub subject: String,      // ⇔ logs.subject (TEXT, default 'default')
    pub action: Action,       // ⇔ logs.action (TEXT, canonical action string)
    #[serde(serialize_with = "serialize_timestamp")]
    pub time: NaiveDateTime,  // ⇔ logs.time (TEXT "YYYY-MM-DD HH:MM:SS")
}

impl LogEvent {
    pub fn time_str(&self) -> String {
        self.time.format(TIMESTAMP_FORMAT).to_string()
    }
}
