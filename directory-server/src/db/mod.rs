//! Database layer
//!
//! A single-file JSON snapshot store: every operation loads the full
//! snapshot, computes a new one, and persists it wholesale.
//!
//! - [`Snapshot`] - the persisted document holding all four record sets
//! - [`DirectoryStore`] - load/persist with a single-writer lock
//! - [`repository`] - per-resource operations over the store

pub mod models;
pub mod repository;
pub mod snapshot;
pub mod store;

pub use snapshot::Snapshot;
pub use store::{DirectoryStore, StoreError};
