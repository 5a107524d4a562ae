//! Status projector: derive the display state from an event history.

use crate::core::engine;
use crate::models::action::Action;
use crate::models::event::LogEvent;
use crate::models::status::{DisplayState, Status};

/// The most recent "Break Start" event, if any.
fn last_break_start(history: &[LogEvent]) -> Option<&LogEvent> {
    history
        .iter()
        .rev()
        .find(|ev| ev.action == Action::BreakStart)
}

/// Project the history into a display state.
///
/// Status and enabled actions are computed from the same slice, so the two
/// can never disagree about what the subject is doing.
pub fn project(history: &[LogEvent]) -> DisplayState {
    let last = engine::last_action(history);
    let next_actions = engine::legal_next_actions(history);

    let (status, break_timer) = match last {
        None | Some(Action::ClockOut) => (Status::NotClockedIn, None),
        Some(Action::ClockIn) | Some(Action::BreakEnd) => (Status::ClockedIn, None),
        Some(Action::BreakStart) => (
            Status::OnBreak,
            last_break_start(history).map(|ev| ev.time),
        ),
    };

    DisplayState {
        status,
        break_timer,
        last_action: last,
        next_actions,
    }
}
