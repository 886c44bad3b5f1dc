//! Stored record types.

use chrono::Utc;
use registration_core::Registration;
use serde::{Deserialize, Serialize};

/// Marker for where a stored copy lives.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// Kept locally; remote delivery was never confirmed.
    Local,
}

/// A registration as it sits in the local backup list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredRecord {
    /// Generated numeric id (millisecond timestamp at append time).
    pub id: i64,

    /// Storage status marker.
    pub status: RecordStatus,

    /// The registration itself, flattened into the same object.
    #[serde(flatten)]
    pub record: Registration,
}

impl StoredRecord {
    /// Tag a registration for local storage.
    pub fn new(record: Registration) -> Self {
        Self {
            id: Utc::now().timestamp_millis(),
            status: RecordStatus::Local,
            record,
        }
    }
}
