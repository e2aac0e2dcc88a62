//! CLI-specific error types
//!
//! Everything raised here is fatal to the invocation; the entry point
//! prints the error and exits non-zero.

use std::fmt;
use std::io;

use crate::roster::RosterError;

/// CLI error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// Roster failed to load
    RosterError,
    /// Server failed to bind or serve
    ServerError,
    /// I/O error
    IoError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "ROSTERD_CLI_CONFIG_ERROR",
            Self::RosterError => "ROSTERD_CLI_ROSTER_ERROR",
            Self::ServerError => "ROSTERD_CLI_SERVER_ERROR",
            Self::IoError => "ROSTERD_CLI_IO_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// Roster load error
    pub fn roster_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::RosterError, msg)
    }

    /// Server error
    pub fn server_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServerError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> CliErrorCode {
        self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::config_error(format!("JSON error: {}", e))
    }
}

impl From<RosterError> for CliError {
    fn from(e: RosterError) -> Self {
        Self::roster_error(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_strings_are_stable() {
        assert_eq!(
            CliError::config_error("bad").code_str(),
            "ROSTERD_CLI_CONFIG_ERROR"
        );
        assert_eq!(
            CliError::roster_error("bad").code_str(),
            "ROSTERD_CLI_ROSTER_ERROR"
        );
    }

    #[test]
    fn test_roster_error_converts() {
        let err: CliError = RosterError::EmptyId { line: 2 }.into();
        assert_eq!(err.code(), CliErrorCode::RosterError);
        assert!(err.message().contains("line 2"));
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let err = CliError::config_error("missing field");
        let msg = format!("{}", err);
        assert!(msg.contains("ROSTERD_CLI_CONFIG_ERROR"));
        assert!(msg.contains("missing field"));
    }
}
