//! In-memory snapshot store for testing and embedding

use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

#[derive(Debug, Clone)]
struct StoredSnapshot {
    payload: String,
    saved_at: NaiveDateTime,
}

/// In-memory snapshot store keeping serialized JSON per key
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    snapshots: Arc<RwLock<HashMap<String, StoredSnapshot>>>,
}

impl MemorySnapshotStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// When the snapshot under `key` was last written
    pub fn saved_at(&self, key: &str) -> JournalResult<Option<NaiveDateTime>> {
        let snapshots = self.snapshots.read().map_err(poisoned)?;
        Ok(snapshots.get(key).map(|s| s.saved_at))
    }

    /// Raw serialized snapshot under `key`
    pub fn raw(&self, key: &str) -> JournalResult<Option<String>> {
        let snapshots = self.snapshots.read().map_err(poisoned)?;
        Ok(snapshots.get(key).map(|s| s.payload.clone()))
    }

    fn put(&self, key: &str, payload: String) -> JournalResult<()> {
        let snapshot = StoredSnapshot {
            payload,
            saved_at: chrono::Utc::now().naive_utc(),
        };
        self.snapshots
            .write()
            .map_err(poisoned)?
            .insert(key.to_string(), snapshot);
        Ok(())
    }
}

fn poisoned<T>(_: T) -> JournalError {
    JournalError::Storage("snapshot lock poisoned".to_string())
}

#[async_trait]
impl SnapshotStore for MemorySnapshotStore {
    async fn save(&mut self, key: &str, entries: &[JournalEntry]) -> JournalResult<()> {
        let payload = serde_json::to_string(entries)
            .map_err(|e| JournalError::Serialization(e.to_string()))?;
        self.put(key, payload)
    }

    async fn load(&self, key: &str) -> JournalResult<Option<Vec<JournalEntry>>> {
        let Some(payload) = self.raw(key)? else {
            return Ok(None);
        };

        match serde_json::from_str(&payload) {
            Ok(entries) => Ok(Some(entries)),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring unreadable journal snapshot");
                Ok(None)
            }
        }
    }

    async fn clear(&mut self, key: &str) -> JournalResult<()> {
        self.snapshots.write().map_err(poisoned)?.remove(key);
        Ok(())
    }
}
