//! Route handlers for the four API endpoints.

use crate::core::status::project;
use crate::core::submit::SubmitLogic;
use crate::db::queries;
use crate::export::csv::csv_string;
use crate::models::action::Action;
use crate::server::AppState;
use crate::server::error::map_error;
use crate::utils::time::format_timestamp;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/logs", get(list_logs).post(submit_log))
        .route("/api/logs/export", get(export_logs))
        .route("/api/status", get(status))
        .with_state(state)
}

/// One history row on the wire: the stored action and timestamp strings.
#[derive(Debug, Serialize)]
struct LogRow {
    action: &'static str,
    time: String,
}

pub(crate) async fn list_logs(State(state): State<AppState>) -> Response {
    let pool = state.pool.lock().await;
    match queries::load_history(&pool.conn, &state.subject) {
        Ok(events) => {
            let rows: Vec<LogRow> = events
                .iter()
                .map(|ev| LogRow {
                    action: ev.action.as_str(),
                    time: ev.time_str(),
                })
                .collect();
            Json(rows).into_response()
        }
        Err(err) => map_error(&err).into_response(),
    }
}

#[derive(Debug, Deserialize)]
struct SubmitBody {
    #[serde(default)]
    action: Option<String>,
}

pub(crate) async fn submit_log(
    State(state): State<AppState>,
    Json(body): Json<SubmitBody>,
) -> Response {
    // A missing `action` key is treated like an unknown action.
    let raw = body.action.unwrap_or_default();

    let mut pool = state.pool.lock().await;
    match SubmitLogic::submit(&mut pool, &state.subject, &raw) {
        Ok(ev) => {
            debug!(action = ev.action.as_str(), id = ev.id, "action accepted");
            Json(serde_json::json!({ "ok": true })).into_response()
        }
        Err(err) => map_error(&err).into_response(),
    }
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    status: &'static str,
    break_timer: Option<String>,
    last_action: Option<&'static str>,
    clockin_enabled: bool,
    clockout_enabled: bool,
    break_start_enabled: bool,
    break_end_enabled: bool,
}

pub(crate) async fn status(State(state): State<AppState>) -> Response {
    let pool = state.pool.lock().await;
    match queries::load_history(&pool.conn, &state.subject) {
        Ok(events) => {
            let view = project(&events);
            Json(StatusResponse {
                status: view.status.as_str(),
                break_timer: view.break_timer.map(|t| format_timestamp(&t)),
                last_action: view.last_action.map(|a| a.as_str()),
                clockin_enabled: view.is_enabled(Action::ClockIn),
                clockout_enabled: view.is_enabled(Action::ClockOut),
                break_start_enabled: view.is_enabled(Action::BreakStart),
                break_end_enabled: view.is_enabled(Action::BreakEnd),
            })
            .into_response()
        }
        Err(err) => map_error(&err).into_response(),
    }
}

#[derive(Debug, Deserialize)]
struct ExportQuery {
    from: Option<String>,
    to: Option<String>,
}

pub(crate) async fn export_logs(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Response {
    // Empty query values mean "no bound", like an absent parameter.
    let from = query.from.as_deref().filter(|s| !s.is_empty());
    let to = query.to.as_deref().filter(|s| !s.is_empty());

    let pool = state.pool.lock().await;
    let events = match queries::load_logs_between(&pool.conn, &state.subject, from, to) {
        Ok(events) => events,
        Err(err) => return map_error(&err).into_response(),
    };

    match csv_string(&events) {
        Ok(body) => (
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment;filename=clocklogs.csv",
                ),
            ],
            body,
        )
            .into_response(),
        Err(err) => map_error(&err).into_response(),
    }
}
