mod common;
use clocklog::core::status::project;
use clocklog::models::action::Action;
use clocklog::models::status::Status;
use clocklog::utils::time::parse_timestamp;
use common::{ev, history};

#[test]
fn test_empty_history_is_not_clocked_in() {
    let view = project(&history(&[]));
    assert_eq!(view.status, Status::NotClockedIn);
    assert_eq!(view.break_timer, None);
    assert_eq!(view.last_action, None);
    assert!(view.is_enabled(Action::ClockIn));
    assert!(!view.is_enabled(Action::ClockOut));
    assert!(!view.is_enabled(Action::BreakStart));
    assert!(!view.is_enabled(Action::BreakEnd));
}

#[test]
fn test_clocked_in_after_clock_in() {
    let view = project(&history(&[Action::ClockIn]));
    assert_eq!(view.status, Status::ClockedIn);
    assert_eq!(view.break_timer, None);
    assert_eq!(view.last_action, Some(Action::ClockIn));
    assert!(view.is_enabled(Action::BreakStart));
    assert!(view.is_enabled(Action::ClockOut));
    assert!(!view.is_enabled(Action::ClockIn));
}

#[test]
fn test_on_break_carries_break_timer() {
    let h = vec![
        ev(1, Action::ClockIn, "2024-01-01 08:00:00"),
        ev(2, Action::BreakStart, "2024-01-01 10:30:00"),
    ];
    let view = project(&h);
    assert_eq!(view.status, Status::OnBreak);
    assert_eq!(
        view.break_timer,
        parse_timestamp("2024-01-01 10:30:00")
    );
    assert!(view.is_enabled(Action::BreakEnd));
    assert!(!view.is_enabled(Action::ClockOut));
}

#[test]
fn test_break_timer_tracks_most_recent_break() {
    let h = vec![
        ev(1, Action::ClockIn, "2024-01-01 08:00:00"),
        ev(2, Action::BreakStart, "2024-01-01 10:00:00"),
        ev(3, Action::BreakEnd, "2024-01-01 10:15:00"),
        ev(4, Action::BreakStart, "2024-01-01 12:00:00"),
    ];
    let view = project(&h);
    assert_eq!(view.status, Status::OnBreak);
    assert_eq!(
        view.break_timer,
        parse_timestamp("2024-01-01 12:00:00")
    );
}

#[test]
fn test_clocked_in_after_break_end() {
    let view = project(&history(&[
        Action::ClockIn,
        Action::BreakStart,
        Action::BreakEnd,
    ]));
    assert_eq!(view.status, Status::ClockedIn);
    assert_eq!(view.break_timer, None);
    assert!(view.is_enabled(Action::BreakStart));
    assert!(view.is_enabled(Action::ClockOut));
}

#[test]
fn test_not_clocked_in_after_clock_out() {
    let view = project(&history(&[
        Action::ClockIn,
        Action::BreakStart,
        Action::BreakEnd,
        Action::ClockOut,
    ]));
    assert_eq!(view.status, Status::NotClockedIn);
    assert_eq!(view.break_timer, None);
    assert!(view.is_enabled(Action::ClockIn));
}

#[test]
fn test_status_display_strings() {
    assert_eq!(Status::NotClockedIn.as_str(), "Not Clocked In");
    assert_eq!(Status::ClockedIn.as_str(), "Clocked In");
    assert_eq!(Status::OnBreak.as_str(), "On Break");
    assert_eq!(Status::Unknown.as_str(), "Unknown State");
}

#[test]
fn test_enabled_actions_match_engine_output() {
    use clocklog::core::engine::legal_next_actions;

    let h = history(&[Action::ClockIn, Action::BreakStart]);
    let view = project(&h);
    let legal = legal_next_actions(&h);
    assert_eq!(view.next_actions, legal);
    for action in Action::ALL {
        assert_eq!(view.is_enabled(action), legal.contains(&action));
    }
}
