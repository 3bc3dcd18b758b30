//! Local journal generation and the generate-and-persist session

use async_trait::async_trait;

use crate::config::{EngineConfig, SNAPSHOT_KEY};
use crate::engine::JournalBuilder;
use crate::traits::*;
use crate::types::*;

/// [`JournalGenerator`] backed by the offline rule-based engine
#[derive(Debug, Clone, Default)]
pub struct HeuristicGenerator {
    builder: JournalBuilder,
}

impl HeuristicGenerator {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            builder: JournalBuilder::new(config),
        }
    }

    pub fn builder(&self) -> &JournalBuilder {
        &self.builder
    }
}

#[async_trait]
impl JournalGenerator for HeuristicGenerator {
    async fn generate(
        &self,
        coa: &[CoaItem],
        transactions: &[TransactionItem],
    ) -> JournalResult<Vec<JournalEntry>> {
        Ok(self.builder.build(coa, transactions))
    }
}

/// Host-side workflow: check inputs, generate entries, keep the latest
/// snapshot in a store.
pub struct JournalSession<G: JournalGenerator, S: SnapshotStore> {
    generator: G,
    store: S,
}

impl<S: SnapshotStore> JournalSession<HeuristicGenerator, S> {
    /// Session using the local engine with default configuration
    pub fn local(store: S) -> Self {
        Self::new(HeuristicGenerator::default(), store)
    }
}

impl<G: JournalGenerator, S: SnapshotStore> JournalSession<G, S> {
    pub fn new(generator: G, store: S) -> Self {
        Self { generator, store }
    }

    /// Generate entries and persist them as the current snapshot.
    ///
    /// Both inputs must be non-empty. A generator failure leaves the
    /// previous snapshot untouched.
    pub async fn generate(
        &mut self,
        coa: &[CoaItem],
        transactions: &[TransactionItem],
    ) -> JournalResult<Vec<JournalEntry>> {
        if coa.is_empty() || transactions.is_empty() {
            return Err(JournalError::EmptyInput(
                "chart of accounts and transactions are both required".to_string(),
            ));
        }

        let entries = self.generator.generate(coa, transactions).await?;
        self.store.save(SNAPSHOT_KEY, &entries).await?;
        tracing::debug!(entries = entries.len(), "saved journal snapshot");
        Ok(entries)
    }

    /// Entries from the last successful run, if a snapshot exists
    pub async fn restore(&self) -> JournalResult<Vec<JournalEntry>> {
        Ok(self.store.load(SNAPSHOT_KEY).await?.unwrap_or_default())
    }

    /// Drop the persisted snapshot
    pub async fn reset(&mut self) -> JournalResult<()> {
        self.store.clear(SNAPSHOT_KEY).await
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
