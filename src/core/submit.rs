//! Action submission: validate against the transition engine and append,
//! all inside one immediate write transaction.

use crate::core::engine;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::action::Action;
use crate::models::event::LogEvent;
use crate::utils::time;
use chrono::NaiveDateTime;
use rusqlite::TransactionBehavior;

/// High-level business logic for submitting a punch.
pub struct SubmitLogic;

impl SubmitLogic {
    /// Parse and submit a raw action string with the current local time.
    pub fn submit(pool: &mut DbPool, subject: &str, raw: &str) -> AppResult<LogEvent> {
        let action =
            Action::act_from_str(raw).ok_or_else(|| AppError::InvalidAction(raw.to_string()))?;
        Self::apply(pool, subject, action, time::now())
    }

    /// Validate `action` against the subject's history and append it.
    ///
    /// The read-validate-append sequence runs inside a `BEGIN IMMEDIATE`
    /// transaction: concurrent submissions are totally ordered and each
    /// validates against the previous one's committed effect. A rejection
    /// rolls back and leaves the history untouched.
    pub fn apply(
        pool: &mut DbPool,
        subject: &str,
        action: Action,
        time: NaiveDateTime,
    ) -> AppResult<LogEvent> {
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let history = queries::load_history(&tx, subject)?;
        let legal = engine::legal_next_actions(&history);

        if !legal.contains(&action) {
            let last = engine::last_action(&history)
                .map(|a| a.as_str())
                .unwrap_or("none");
            return Err(AppError::IllegalTransition(format!(
                "'{}' is not allowed after '{}'",
                action.as_str(),
                last
            )));
        }

        let ev = queries::insert_log(&tx, subject, action, time)?;
        tx.commit()?;
        Ok(ev)
    }
}
