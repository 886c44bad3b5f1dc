//! Bounded FIFO backup of registrations.

use crate::backend::Store;
use crate::types::StoredRecord;
use registration_core::Registration;
use tracing::{debug, instrument, warn};

/// Maximum records kept by default.
pub const DEFAULT_CAPACITY: usize = 100;

/// Bounded local backup of submitted registrations.
///
/// Append-only from the caller's perspective; once the list is full the
/// oldest entry is evicted. Storage problems never surface: unreadable or
/// malformed state loads as an empty list, and a failed write is logged
/// and dropped.
pub struct BackupStore {
    store: Store,
    capacity: usize,
}

impl BackupStore {
    pub fn new(store: Store, capacity: usize) -> Self {
        Self { store, capacity }
    }

    /// Load the backup list, treating any failure as an empty list.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Vec<StoredRecord> {
        let raw = match self.store.read().await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read backup storage, treating as empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("Backup storage is malformed, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Append a registration, evicting the oldest entry past capacity.
    ///
    /// Returns the stored copy. A write failure is logged only; the
    /// caller never sees it.
    #[instrument(skip(self, record))]
    pub async fn append(&self, record: &Registration) -> StoredRecord {
        let stored = StoredRecord::new(record.clone());

        let mut records = self.load().await;
        records.push(stored.clone());

        let excess = records.len().saturating_sub(self.capacity);
        if excess > 0 {
            records.drain(..excess);
            debug!("Evicted {} oldest backup record(s)", excess);
        }

        match serde_json::to_string(&records) {
            Ok(raw) => {
                if let Err(e) = self.store.write(&raw).await {
                    warn!("Failed to write backup storage: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize backup records: {}", e),
        }

        debug!("Backup list now holds {} record(s)", records.len());
        stored
    }

    /// Number of records currently stored.
    pub async fn count(&self) -> usize {
        self.load().await.len()
    }
}
