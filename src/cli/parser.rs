use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for clocklog
#[derive(Parser)]
#[command(
    name = "clocklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small self-hosted time clock: log clock-in/out and breaks over HTTP or from the terminal",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Run the HTTP API server
    Serve {
        /// Address to bind (defaults to the configured host)
        #[arg(long, help = "Address to bind (default from config)")]
        host: Option<String>,

        /// Port to listen on (defaults to the configured port)
        #[arg(long, help = "Port to listen on (default from config)")]
        port: Option<u16>,
    },

    /// Log a punch action from the terminal
    Punch {
        /// Action to log: "Clock In", "Clock Out", "Break Start", "Break End"
        action: String,

        /// Tracked subject (defaults to the configured subject)
        #[arg(long, help = "Tracked subject (default from config)")]
        subject: Option<String>,
    },

    /// Show the current status and the actions allowed next
    Status {
        /// Tracked subject (defaults to the configured subject)
        #[arg(long, help = "Tracked subject (default from config)")]
        subject: Option<String>,
    },

    /// List recorded events
    List {
        /// Tracked subject (defaults to the configured subject)
        #[arg(long, help = "Tracked subject (default from config)")]
        subject: Option<String>,

        /// Inclusive lower bound on the event time
        #[arg(long, value_name = "TIME", help = "Inclusive lower bound (YYYY-MM-DD HH:MM:SS)")]
        from: Option<String>,

        /// Inclusive upper bound on the event time
        #[arg(long, value_name = "TIME", help = "Inclusive upper bound (YYYY-MM-DD HH:MM:SS)")]
        to: Option<String>,
    },

    /// Export the event log to a file
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Inclusive lower bound on the event time
        #[arg(long, value_name = "TIME", help = "Inclusive lower bound (YYYY-MM-DD HH:MM:SS)")]
        from: Option<String>,

        /// Inclusive upper bound on the event time
        #[arg(long, value_name = "TIME", help = "Inclusive upper bound (YYYY-MM-DD HH:MM:SS)")]
        to: Option<String>,

        /// Tracked subject (defaults to the configured subject)
        #[arg(long, help = "Tracked subject (default from config)")]
        subject: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
