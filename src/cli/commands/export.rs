use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        from,
        to,
        subject,
        force,
    } = cmd
    {
        let subject = subject.as_deref().unwrap_or(&cfg.subject);

        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(
            &mut pool,
            format,
            file,
            subject,
            from.as_deref(),
            to.as_deref(),
            *force,
        )?;
    }
    Ok(())
}
