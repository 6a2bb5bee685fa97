//! Versioned snapshot persistence.
//!
//! The whole record set persists as one JSON document with an explicit
//! version tag. Loading always succeeds: a missing or corrupt document is
//! replaced by the seed defaults and the recovery is reported to the caller.

pub mod error;
pub mod migrate;
pub mod store;
pub mod types;

pub use error::SnapshotError;
pub use store::{LoadedSnapshot, SnapshotRecovery, SnapshotStore};
pub use types::{SNAPSHOT_VERSION, SnapshotDocument};
