//! # Admin Console
//!
//! Terminal dashboard and command line for the Universal Credit Wallet
//! fraud-review backend.
//!
//! ## TUI Mode
//! Uses ratatui for rendering and crossterm for terminal handling.
//!
//! ### Screens
//! - **Overview**: User, pending-flag, balance and activity totals plus the pending queue
//! - **Users**: Accounts with status and balance
//! - **Fraud Flags**: Filterable flag list with approve/reject
//! - **Audit Logs**: Paged administrative history
//! - **Config**: Credit issuance configuration
//!
//! ## CLI Mode
//! One-shot `users`, `flags`, `resolve`, `audit`, `config` and `health`
//! commands print plain text and log to stderr.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod screens;

pub use error::{ConsoleError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::{Action, App, TuiApp};
    pub use crate::cli::Cli;
    pub use crate::config::ConsoleConfig;
    pub use crate::error::ConsoleError;
}
