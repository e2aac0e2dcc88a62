//! Employee record and track types
//!
//! One roster entry per record. Records are immutable after construction;
//! the index hands out clones, never live views.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single parsed roster entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Opaque identifier, unique within the roster
    pub id: String,
    /// Given name
    pub first_name: String,
    /// Family name; substring queries match against this
    pub last_name: String,
    /// Home postal code, treated as opaque text
    pub hometown_zip: String,
    /// Free-text biography column; never queried
    pub bio: String,
    /// Discipline category
    pub track: Track,
}

impl Employee {
    /// Create a new employee record
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        hometown_zip: impl Into<String>,
        bio: impl Into<String>,
        track: Track,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            hometown_zip: hometown_zip.into(),
            bio: bio.into(),
            track,
        }
    }
}

/// Closed set of discipline categories
///
/// Membership is fixed at compile time. Comparison is exact equality;
/// parsing an unrecognized token is an error, never a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Track {
    #[serde(rename = "ENGINEERING")]
    Engineering,
    #[serde(rename = "DESIGN")]
    Design,
    #[serde(rename = "MARKETING")]
    Marketing,
    #[serde(rename = "SALES")]
    Sales,
    #[serde(rename = "SUPPORT")]
    Support,
}

impl Track {
    /// All defined tracks, in declaration order
    pub const ALL: [Track; 5] = [
        Track::Engineering,
        Track::Design,
        Track::Marketing,
        Track::Sales,
        Track::Support,
    ];

    /// The canonical uppercase wire token
    pub fn as_str(&self) -> &'static str {
        match self {
            Track::Engineering => "ENGINEERING",
            Track::Design => "DESIGN",
            Track::Marketing => "MARKETING",
            Track::Sales => "SALES",
            Track::Support => "SUPPORT",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string is not a track token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTrackError {
    /// The rejected token
    pub token: String,
}

impl fmt::Display for ParseTrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown track: '{}'", self.token)
    }
}

impl std::error::Error for ParseTrackError {}

impl FromStr for Track {
    type Err = ParseTrackError;

    /// Parse a track token case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Track::ALL
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ParseTrackError {
                token: s.to_string(),
            })
    }
}
