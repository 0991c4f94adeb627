//! Tracing setup.
//!
//! One-shot commands log to stderr. The TUI owns the terminal, so it logs
//! to a file instead.

use crate::error::{ConsoleError, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Where log output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

const CRATES: [&str; 3] = ["admin_console", "admin_core", "admin_client"];

/// Build the filter: `RUST_LOG` first, then `level` for the console crates
fn build_filter(level: &str) -> Result<EnvFilter> {
    let mut filter = EnvFilter::from_default_env();
    for krate in CRATES {
        let directive = format!("{}={}", krate, level.to_lowercase())
            .parse()
            .map_err(|e| ConsoleError::Logging(format!("{}", e)))?;
        filter = filter.add_directive(directive);
    }
    Ok(filter)
}

/// Install the global tracing subscriber
pub fn init(level: &str, target: &LogTarget) -> Result<()> {
    let filter = build_filter(level)?;

    let result = match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .try_init()
        }
    };

    result.map_err(|e| ConsoleError::Logging(e.to_string()))
}
