//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. One-shot commands
//! render their output as plain lines so it can be piped or grepped.

pub mod audit;
pub mod credit_config;
pub mod flags;
pub mod health;
pub mod resolve;
pub mod tui;
pub mod users;

/// Print rendered lines to stdout
pub(crate) fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
