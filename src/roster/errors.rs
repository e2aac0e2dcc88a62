//! # Roster Errors
//!
//! Error types for roster loading.
//!
//! Every parse error carries the 1-based line number of the offending line
//! so a broken roster file can be fixed without guessing.

use std::io;

use thiserror::Error;

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

/// Errors raised while loading the roster resource
#[derive(Debug, Error)]
pub enum RosterError {
    /// The roster file could not be read
    #[error("Failed to read roster '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A line did not have exactly six pipe-delimited fields
    #[error("Malformed roster line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    /// The sixth field was not a recognized track token
    #[error("Unknown track '{token}' on roster line {line}")]
    UnknownTrack { line: usize, token: String },

    /// The id field was empty
    #[error("Empty employee id on roster line {line}")]
    EmptyId { line: usize },

    /// The id field duplicated an earlier line
    #[error("Duplicate employee id '{id}' on roster line {line}")]
    DuplicateId { line: usize, id: String },
}

impl RosterError {
    /// The 1-based line number the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            RosterError::Io { .. } => None,
            RosterError::MalformedLine { line, .. }
            | RosterError::UnknownTrack { line, .. }
            | RosterError::EmptyId { line }
            | RosterError::DuplicateId { line, .. } => Some(*line),
        }
    }
}
