//! Manifest records and their display order

use std::cmp::{Ordering, Reverse};

/// One immutable snapshot of a depot's files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Never empty
    pub manifest_id: String,
    pub build_id: String,
    pub branch_name: Option<String>,
    pub is_public: bool,
    /// Seen in the depot's manifest history rather than on a live branch
    pub is_historical: bool,
    pub description: Option<String>,
    /// Epoch seconds
    pub last_updated: Option<i64>,
}

impl Manifest {
    /// Timestamped entries first (newest first); among untimed entries,
    /// branch manifests before historical ones.
    fn sort_key(&self) -> (bool, Reverse<i64>, bool) {
        match self.last_updated {
            Some(ts) => (false, Reverse(ts), false),
            None => (true, Reverse(0), self.is_historical),
        }
    }

    /// Ordering used for manifest listings; ties keep input order under a stable sort
    pub fn display_order(a: &Manifest, b: &Manifest) -> Ordering {
        a.sort_key().cmp(&b.sort_key())
    }
}
