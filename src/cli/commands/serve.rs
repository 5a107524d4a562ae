use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::server::{AppState, serve};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

/// Handle the `serve` command: set up tracing, open the store, and run the
/// HTTP server until terminated.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { host, port } = cmd {
        let host = host.clone().unwrap_or_else(|| cfg.host.clone());
        let port = port.unwrap_or(cfg.port);

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .init();

        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|e| AppError::Server(format!("invalid address {host}:{port}: {e}")))?;

        let state = AppState::new(pool, cfg.subject.clone());

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(serve(state, addr))?;
    }
    Ok(())
}
