//! Wallet admin console entry point

use admin_console::prelude::*;
use anyhow::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // Tracing is set up inside `run`: the TUI logs to a file so the
    // terminal is not disturbed.
    let cli = Cli::parse();
    admin_console::cli::run(cli).await
}
