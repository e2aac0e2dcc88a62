//! In-memory roster index
//!
//! Holds the loaded records as a read-only snapshot for the life of the
//! process and answers the five query operations. Built exactly once;
//! shared behind `Arc` by the HTTP layer with no locking, since nothing
//! mutates it after construction.
//!
//! Every query is a single linear scan over the snapshot. `all_sorted`
//! re-sorts on each call; at roster sizes of tens to low hundreds of
//! records a cached sort order is not worth the bookkeeping.

use super::record::{Employee, Track};

/// Read-only snapshot of the loaded roster
#[derive(Debug)]
pub struct RosterIndex {
    records: Vec<Employee>,
}

impl RosterIndex {
    /// Build the index from loader output, keeping load order
    pub fn new(records: Vec<Employee>) -> Self {
        Self { records }
    }

    /// Number of records in the snapshot
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, ascending by last name
    ///
    /// Byte-wise string comparison; the sort is stable, so records with
    /// equal last names keep their load order.
    pub fn all_sorted(&self) -> Vec<Employee> {
        let mut all = self.records.clone();
        all.sort_by(|a, b| a.last_name.cmp(&b.last_name));
        all
    }

    /// Records whose last name contains `query`, case-folded
    ///
    /// The empty string matches every record; rejecting blank queries is
    /// the caller's concern. Results keep load order.
    pub fn by_last_name(&self, query: &str) -> Vec<Employee> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.last_name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Records whose track equals `track` exactly, in load order
    pub fn by_track(&self, track: Track) -> Vec<Employee> {
        self.records
            .iter()
            .filter(|r| r.track == track)
            .cloned()
            .collect()
    }

    /// Records whose home ZIP contains `query`, case-folded, in load order
    pub fn by_hometown_zip(&self, query: &str) -> Vec<Employee> {
        let needle = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| r.hometown_zip.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// The record whose id equals `id` exactly, if any
    ///
    /// An absent id is a normal outcome, not an error.
    pub fn by_id(&self, id: &str) -> Option<Employee> {
        self.records.iter().find(|r| r.id == id).cloned()
    }
}
