//! Export dispatch: load the filtered history and hand it to the format
//! writer chosen on the command line.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::export::{ExportFormat, csv, fs_utils, json, notify_export_success};
use std::fs::File;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    #[allow(clippy::too_many_arguments)]
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        subject: &str,
        from: Option<&str>,
        to: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        fs_utils::ensure_writable(path, force)?;

        let events = queries::load_logs_between(&pool.conn, subject, from, to)?;

        match format {
            ExportFormat::Csv => {
                let out = File::create(path)?;
                csv::write_csv(out, &events)?;
            }
            ExportFormat::Json => json::write_json(file, &events)?,
        }

        notify_export_success(format.as_str(), path);
        Ok(())
    }
}
