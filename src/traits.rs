//! Traits for swappable journal generation and snapshot storage

use async_trait::async_trait;

use crate::types::*;

/// Backend that turns a chart and statement movements into journal entries.
///
/// The local heuristic engine implements this; a remote classification
/// service can stand in behind the same contract without changing any
/// consumer of the entries.
#[async_trait]
pub trait JournalGenerator: Send + Sync {
    /// Generate one journal entry per transaction, in input order
    async fn generate(
        &self,
        coa: &[CoaItem],
        transactions: &[TransactionItem],
    ) -> JournalResult<Vec<JournalEntry>>;
}

/// Storage for the latest journal snapshot.
///
/// Snapshots are written wholesale; saving under an existing key replaces
/// the previous snapshot.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Replace the snapshot stored under `key`
    async fn save(&mut self, key: &str, entries: &[JournalEntry]) -> JournalResult<()>;

    /// Load the snapshot stored under `key`, if any
    async fn load(&self, key: &str) -> JournalResult<Option<Vec<JournalEntry>>>;

    /// Remove the snapshot stored under `key`
    async fn clear(&mut self, key: &str) -> JournalResult<()>;
}
