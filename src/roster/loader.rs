//! Roster loader
//!
//! Parses the pipe-delimited roster resource into an ordered record list at
//! startup. Each line has exactly six fields:
//!
//! ```text
//! id|firstName|lastName|hometownZip|bio|track
//! ```
//!
//! The roster is read exactly once, before the service accepts traffic.
//! Malformed lines are governed by [`MalformedLinePolicy`]: the default
//! fails initialization outright rather than serving an incomplete roster.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::observability::{Logger, Severity};

use super::errors::{RosterError, RosterResult};
use super::record::{Employee, Track};

/// The roster bundled into the binary, used when no path is configured
pub const BUNDLED_ROSTER: &str = include_str!("../../resources/employees.csv");

/// Field delimiter within a roster line
const DELIMITER: char = '|';

/// Fields per well-formed line
const FIELD_COUNT: usize = 6;

/// What to do with a line that fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    /// Any malformed line fails the whole load
    #[default]
    Fail,
    /// Drop the malformed line with a logged warning, keep the rest
    Skip,
}

/// Loads roster records from text resources
pub struct RosterLoader {
    policy: MalformedLinePolicy,
}

impl RosterLoader {
    /// Create a loader with the given malformed-line policy
    pub fn new(policy: MalformedLinePolicy) -> Self {
        Self { policy }
    }

    /// Load records from the roster bundled into the binary
    pub fn load_bundled(&self) -> RosterResult<Vec<Employee>> {
        self.load_from_str(BUNDLED_ROSTER)
    }

    /// Load records from a roster file on disk
    pub fn load_from_path(&self, path: &Path) -> RosterResult<Vec<Employee>> {
        let content = fs::read_to_string(path).map_err(|e| RosterError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        self.load_from_str(&content)
    }

    /// Parse roster text into records, preserving line order
    ///
    /// Blank lines are skipped. Every other line must parse; what happens
    /// when one does not is decided by the configured policy.
    pub fn load_from_str(&self, content: &str) -> RosterResult<Vec<Employee>> {
        let mut records: Vec<Employee> = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let line_no = idx + 1;

            if line.trim().is_empty() {
                continue;
            }

            match Self::parse_line(line, line_no, &records) {
                Ok(record) => records.push(record),
                Err(e) => match self.policy {
                    MalformedLinePolicy::Fail => return Err(e),
                    MalformedLinePolicy::Skip => {
                        Logger::log(
                            Severity::Warn,
                            "roster_line_skipped",
                            &[("line", &line_no.to_string()), ("reason", &e.to_string())],
                        );
                    }
                },
            }
        }

        Ok(records)
    }

    /// Parse a single roster line
    ///
    /// `prior` is the records accepted so far, consulted for the uniqueness
    /// invariant on `id`.
    fn parse_line(line: &str, line_no: usize, prior: &[Employee]) -> RosterResult<Employee> {
        let fields: Vec<&str> = line.split(DELIMITER).collect();

        if fields.len() != FIELD_COUNT {
            return Err(RosterError::MalformedLine {
                line: line_no,
                reason: format!("expected {} fields, got {}", FIELD_COUNT, fields.len()),
            });
        }

        let id = fields[0].trim();
        if id.is_empty() {
            return Err(RosterError::EmptyId { line: line_no });
        }
        if prior.iter().any(|r| r.id == id) {
            return Err(RosterError::DuplicateId {
                line: line_no,
                id: id.to_string(),
            });
        }

        let track: Track = fields[5]
            .trim()
            .parse()
            .map_err(|_| RosterError::UnknownTrack {
                line: line_no,
                token: fields[5].trim().to_string(),
            })?;

        Ok(Employee::new(
            id, fields[1], fields[2], fields[3], fields[4], track,
        ))
    }
}

impl Default for RosterLoader {
    fn default() -> Self {
        Self::new(MalformedLinePolicy::Fail)
    }
}
