//! CLI argument definitions using clap
//!
//! Commands:
//! - rosterd start --config <path>
//! - rosterd check --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rosterd - A read-only employee roster lookup service
#[derive(Parser, Debug)]
#[command(name = "rosterd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the roster and serve the lookup endpoints
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./rosterd.json")]
        config: PathBuf,
    },

    /// Load the roster, print the record count, and exit
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./rosterd.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
