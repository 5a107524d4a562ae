//! Transition engine: which actions may legally follow a given history.
//!
//! Pure functions over an ordered event slice. The same history always
//! yields the same answer; callers must validate and append under one
//! store snapshot (see `core::submit`).

use crate::models::action::Action;
use crate::models::event::LogEvent;

/// The action of the most recent event, or None for an empty history.
pub fn last_action(history: &[LogEvent]) -> Option<Action> {
    history.last().map(|ev| ev.action)
}

/// Index of the most recent "Break Start" in the history.
fn last_break_start_index(history: &[LogEvent]) -> Option<usize> {
    history
        .iter()
        .rposition(|ev| ev.action == Action::BreakStart)
}

/// The most recent "Break Start" not yet consumed by a later "Break End":
/// the last "Break Start" recorded after the final "Break End" anywhere in
/// the history (or after the beginning, if no break was ever ended).
pub(crate) fn latest_unused_break_start(history: &[LogEvent]) -> Option<&LogEvent> {
    let last_break_end = history.iter().rposition(|ev| ev.action == Action::BreakEnd);

    history
        .iter()
        .enumerate()
        .filter(|(idx, ev)| {
            ev.action == Action::BreakStart && last_break_end.map_or(true, |end| *idx > end)
        })
        .map(|(_, ev)| ev)
        .last()
}

/// Legal next actions for the given history.
///
/// Keyed on the last action, with a history lookback for the break
/// sub-cycle: an open break may be ended exactly once.
pub fn legal_next_actions(history: &[LogEvent]) -> Vec<Action> {
    match last_action(history) {
        None | Some(Action::ClockOut) => vec![Action::ClockIn],

        Some(Action::ClockIn) => vec![Action::BreakStart, Action::ClockOut],

        Some(Action::BreakStart) => match last_break_start_index(history) {
            // The open break can be ended only while no later "Break End"
            // exists. Rows inserted outside this engine can violate that;
            // in that case nothing is legal.
            Some(start)
                if !history[start + 1..]
                    .iter()
                    .any(|ev| ev.action == Action::BreakEnd) =>
            {
                vec![Action::BreakEnd]
            }
            _ => Vec::new(),
        },

        Some(Action::BreakEnd) => {
            // TODO: decide whether an unused break start should gate
            // "Clock Out" here; both arms return the same set until that
            // question is settled.
            if latest_unused_break_start(history).is_some() {
                vec![Action::BreakStart, Action::ClockOut]
            } else {
                vec![Action::BreakStart, Action::ClockOut]
            }
        }
    }
}
