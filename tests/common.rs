#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use clocklog::db::initialize::init_db;
use clocklog::db::pool::DbPool;
use clocklog::models::action::Action;
use clocklog::models::event::LogEvent;
use clocklog::utils::time::parse_timestamp;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn clk() -> Command {
    cargo_bin_cmd!("clocklog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_clocklog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Open a pool on a fresh test DB with the schema applied.
pub fn open_pool(name: &str) -> (DbPool, String) {
    let path = setup_test_db(name);
    let pool = DbPool::new(&path).expect("open db");
    init_db(&pool.conn).expect("init db");
    (pool, path)
}

/// Build an in-memory event for pure-function tests.
pub fn ev(id: i32, action: Action, time: &str) -> LogEvent {
    LogEvent {
        id,
        subject: "default".to_string(),
        action,
        time: parse_timestamp(time).expect("valid timestamp"),
    }
}

/// Build a history from a sequence of actions, one minute apart.
pub fn history(actions: &[Action]) -> Vec<LogEvent> {
    actions
        .iter()
        .enumerate()
        .map(|(i, a)| {
            ev(
                i as i32 + 1,
                *a,
                &format!("2024-01-01 08:{:02}:00", i),
            )
        })
        .collect()
}

/// Initialize a DB via the CLI and punch a full work day into it.
pub fn init_db_with_data(db_path: &str) {
    clk()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for action in ["Clock In", "Break Start", "Break End", "Clock Out"] {
        clk()
            .args(["--db", db_path, "punch", action])
            .assert()
            .success();
    }
}
