//! CLI module for rosterd
//!
//! Provides the command-line interface:
//! - start: load the roster and serve the lookup endpoints
//! - check: load the roster, print the record count, exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, run, start, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
