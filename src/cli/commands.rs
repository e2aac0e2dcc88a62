//! CLI command implementations
//!
//! Boot sequence for `start`: read configuration, load the roster (the
//! default policy makes any malformed line fatal, so the process refuses to
//! serve an incomplete roster), then bind the HTTP listener. `check` stops
//! after the load step; it exists so CI can lint a roster file without
//! starting a server.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::roster::{MalformedLinePolicy, RosterIndex, RosterLoader};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Roster file path; absent means the bundled roster
    #[serde(default)]
    pub roster_path: Option<String>,

    /// What to do with malformed roster lines (default: fail)
    #[serde(default)]
    pub on_malformed: MalformedLinePolicy,

    /// HTTP server settings
    #[serde(default)]
    pub http: HttpServerConfig,
}

impl Config {
    /// Load configuration from file
    ///
    /// A missing file yields the defaults; the bundled roster makes the
    /// service usable with zero configuration. A file that exists but does
    /// not parse is a config error.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        Ok(config)
    }
}

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Start { config } => start(&config),
        Command::Check { config } => check(&config),
    }
}

/// Load the roster according to configuration
fn load_index(config: &Config) -> CliResult<RosterIndex> {
    let loader = RosterLoader::new(config.on_malformed);

    let (records, source) = match &config.roster_path {
        Some(path) => (loader.load_from_path(Path::new(path))?, path.as_str()),
        None => (loader.load_bundled()?, "bundled"),
    };

    Logger::info(
        "roster_loaded",
        &[("count", &records.len().to_string()), ("source", source)],
    );

    Ok(RosterIndex::new(records))
}

/// Start the service: config, roster, then the HTTP listener
pub fn start(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let index = load_index(&config)?;
    let server = HttpServer::new(config.http, index);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_error(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::server_error(e.to_string()))
}

/// Validate config and roster without serving
pub fn check(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let index = load_index(&config)?;

    println!("roster ok: {} records", index.len());
    Ok(())
}
