mod common;
use clocklog::core::submit::SubmitLogic;
use clocklog::db::queries::load_logs_between;
use clocklog::export::csv::csv_string;
use clocklog::models::action::Action;
use clocklog::utils::time::parse_timestamp;
use common::{clk, init_db_with_data, open_pool, setup_test_db, temp_out};
use std::fs;

fn seed_day(pool: &mut clocklog::db::pool::DbPool) {
    let punches = [
        (Action::ClockIn, "2024-01-01 08:00:00"),
        (Action::BreakStart, "2024-01-01 12:00:00"),
        (Action::BreakEnd, "2024-01-01 12:30:00"),
        (Action::ClockOut, "2024-01-01 17:00:00"),
    ];
    for (action, time) in punches {
        SubmitLogic::apply(pool, "default", action, parse_timestamp(time).unwrap())
            .expect("accepted");
    }
}

#[test]
fn test_filter_bounds_are_inclusive() {
    let (mut pool, _path) = open_pool("export_inclusive_bounds");
    seed_day(&mut pool);

    // Both bounds sit exactly on stored timestamps and must be included.
    let events = load_logs_between(
        &pool.conn,
        "default",
        Some("2024-01-01 12:00:00"),
        Some("2024-01-01 12:30:00"),
    )
    .expect("filtered history");

    let ids: Vec<i32> = events.iter().map(|ev| ev.id).collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn test_filter_from_only() {
    let (mut pool, _path) = open_pool("export_from_only");
    seed_day(&mut pool);

    let events = load_logs_between(&pool.conn, "default", Some("2024-01-01 09:00:00"), None)
        .expect("filtered history");

    let ids: Vec<i32> = events.iter().map(|ev| ev.id).collect();
    assert_eq!(ids, vec![2, 3, 4]);
}

#[test]
fn test_csv_document_layout() {
    let (mut pool, _path) = open_pool("export_csv_layout");
    seed_day(&mut pool);

    let events = load_logs_between(&pool.conn, "default", None, None).expect("history");
    let csv = csv_string(&events).expect("csv");

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "ID,Action,Time");
    assert_eq!(lines[1], "1,Clock In,2024-01-01 08:00:00");
    assert_eq!(lines[4], "4,Clock Out,2024-01-01 17:00:00");
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_cli_export_csv_all() {
    let db_path = setup_test_db("export_cli_csv_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_cli_csv_all", "csv");

    clk()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("ID,Action,Time"));
    assert!(content.contains("Clock In"));
    assert!(content.contains("Clock Out"));
}

#[test]
fn test_cli_export_json_all() {
    let db_path = setup_test_db("export_cli_json_all");
    init_db_with_data(&db_path);

    let out = temp_out("export_cli_json_all", "json");

    clk()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"Clock In\""));
    assert!(content.contains("\"Break Start\""));
}

#[test]
fn test_cli_export_excludes_events_before_from() {
    let db_path = setup_test_db("export_cli_from_filter");
    init_db_with_data(&db_path);

    let out = temp_out("export_cli_from_filter", "csv");

    // A lower bound in the far future filters everything out.
    clk()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force", "--from",
            "2999-01-01 00:00:00",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(content.trim(), "ID,Action,Time");
}
