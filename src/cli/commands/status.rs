use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::project;
use crate::db::pool::DbPool;
use crate::db::queries::load_history;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::time::format_timestamp;

/// Handle the `status` command: print the current projection.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { subject } = cmd {
        let subject = subject.as_deref().unwrap_or(&cfg.subject);

        let pool = DbPool::new(&cfg.database)?;
        let events = load_history(&pool.conn, subject)?;
        let view = project(&events);

        info(format!("Status: {}", view.status.as_str()));
        if let Some(t) = view.break_timer {
            info(format!("On break since {}", format_timestamp(&t)));
        }

        let next: Vec<&str> = view.next_actions.iter().map(|a| a.as_str()).collect();
        if next.is_empty() {
            info("Allowed next: none");
        } else {
            info(format!("Allowed next: {}", next.join(", ")));
        }
    }
    Ok(())
}
