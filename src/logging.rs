//! Tracing subscriber setup.
//!
//! The filter comes from `$COVERDESK_LOG` (default `warn`). CLI commands log to
//! stderr; the TUI owns the terminal, so it logs to a file in the data directory.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::data_dir;
use crate::error::Result;

pub const LOG_ENV: &str = "COVERDESK_LOG";

/// Where log output should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File,
}

fn make_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Path of the TUI log file
pub fn log_file_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("coverdesk.log"))
}

/// Install the global subscriber. Calling it twice is harmless; the second
/// call is ignored.
pub fn init(target: LogTarget) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(make_filter())
        .with_target(false);

    match target {
        LogTarget::Stderr => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
        LogTarget::File => {
            let path = log_file_path()?;
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = File::options().create(true).append(true).open(&path)?;
            let _ = builder
                .with_ansi(false)
                .with_writer(Arc::new(file))
                .try_init();
        }
    }
    Ok(())
}
