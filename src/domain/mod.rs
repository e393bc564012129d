//! Domain models for depot-picker
//!
//! Plain records produced from storefront and Steam metadata. They are built
//! once per run and never mutated afterwards.

pub mod application;
pub mod depot;
pub mod manifest;

pub use application::Application;
pub use depot::{Depot, DepotFlag, OsClassification};
pub use manifest::Manifest;
