//! Roster model, loader, and in-memory index
//!
//! The core of the service: parse the bundled pipe-delimited roster once at
//! startup, then answer read-only queries over the snapshot.

mod errors;
mod index;
mod loader;
mod record;

pub use errors::{RosterError, RosterResult};
pub use index::RosterIndex;
pub use loader::{MalformedLinePolicy, RosterLoader, BUNDLED_ROSTER};
pub use record::{Employee, ParseTrackError, Track};
