use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::SubmitLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `punch` command: submit one action through the same
/// validation path as the HTTP API.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { action, subject } = cmd {
        let subject = subject.as_deref().unwrap_or(&cfg.subject);

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let ev = SubmitLogic::submit(&mut pool, subject, action)?;
        success(format!("{} recorded at {}", ev.action.as_str(), ev.time_str()));
    }
    Ok(())
}
