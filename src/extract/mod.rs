//! Pure transformations from raw product metadata into selectable records
//!
//! Neither extractor fails: malformed or missing fields degrade to `None`
//! (or [`OsClassification::Unknown`](crate::domain::OsClassification)).

pub mod depots;
pub mod manifests;

pub use depots::{classify_os, extract_depots};
pub use manifests::extract_manifests;
