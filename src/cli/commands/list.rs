use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_logs_between;
use crate::errors::AppResult;

/// Handle the `list` command: print the (optionally filtered) history.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { subject, from, to } = cmd {
        let subject = subject.as_deref().unwrap_or(&cfg.subject);

        let pool = DbPool::new(&cfg.database)?;
        let events = load_logs_between(&pool.conn, subject, from.as_deref(), to.as_deref())?;

        if events.is_empty() {
            println!("No events recorded.");
            return Ok(());
        }

        println!("{:>5}  {:<12}  {}", "ID", "ACTION", "TIME");
        for ev in &events {
            // Break events are indented under their clocked-in block.
            let marker = if ev.action.is_break() { "  " } else { "" };
            println!(
                "{:>5}  {}{:<12}  {}",
                ev.id,
                marker,
                ev.action.as_str(),
                ev.time_str()
            );
        }
        println!("\n{} event(s)", events.len());
    }
    Ok(())
}
