use crate::errors::{AppError, AppResult};
use crate::models::event::LogEvent;
use csv::Writer;
use std::io::Write;

/// Write the events as CSV rows behind an `ID,Action,Time` header.
pub fn write_csv<W: Write>(out: W, events: &[LogEvent]) -> AppResult<()> {
    let mut wtr = Writer::from_writer(out);

    wtr.write_record(["ID", "Action", "Time"])?;

    for ev in events {
        wtr.write_record([
            ev.id.to_string(),
            ev.action.as_str().to_string(),
            ev.time_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// The CSV document as a String (used by the HTTP export endpoint).
pub fn csv_string(events: &[LogEvent]) -> AppResult<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, events)?;
    String::from_utf8(buf).map_err(|e| AppError::Export(e.to_string()))
}
