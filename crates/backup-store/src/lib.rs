//! Bounded local backup storage for registrations.
//!
//! Keeps the last [`DEFAULT_CAPACITY`] submitted records as a
//! local fallback trail, on disk as JSON or in memory. Fails open: a
//! broken backing store behaves like an empty one.

mod backend;
mod error;
mod store;
mod types;

pub use backend::{JsonFileStore, MemoryStore, Store};
pub use error::StoreError;
pub use store::{BackupStore, DEFAULT_CAPACITY};
pub use types::{RecordStatus, StoredRecord};
