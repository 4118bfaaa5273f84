//! CLI entry point.
//!
//! # Responsibility
//! - Parse process flags and bootstrap core logging.
//! - Run the fixed demo sequence against a fresh task manager.

mod demo;

use clap::Parser;
use log::info;
use std::error::Error;
use std::io::{self, Write};
use tasktrack_core::{default_log_level, init_logging};

/// Runs the tasktrack demo: sample users, one project, two tasks.
#[derive(Debug, Parser)]
#[command(name = "tasktrack", version)]
struct Args {
    /// Log level: trace|debug|info|warn|error.
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rotating log files. Logs go to stderr when unset.
    #[arg(long)]
    log_dir: Option<String>,

    /// Print the registry as JSON after the demo.
    #[arg(long)]
    snapshot: bool,
}

impl Args {
    fn effective_log_level(&self) -> &str {
        match (&self.log_level, &self.log_dir) {
            (Some(level), _) => level.as_str(),
            // Keep stderr quiet for the plain demo run.
            (None, None) => "warn",
            (None, Some(_)) => default_log_level(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.effective_log_level(), args.log_dir.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let manager = demo::run(&mut out)?;
    info!(
        "event=demo_finished module=cli status=ok users={} projects={}",
        manager.users().len(),
        manager.projects().len()
    );

    if args.snapshot {
        let snapshot = demo::snapshot(&manager);
        writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
    }
    Ok(())
}
