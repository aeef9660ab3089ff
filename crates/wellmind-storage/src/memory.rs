use tokio::sync::RwLock;

use wellmind_core::models::assessment::AssessmentResult;
use wellmind_core::models::instrument::InstrumentId;
use wellmind_core::store_keys;

use crate::error::StorageError;
use crate::store::{ResultStore, sort_newest_first};

/// Process-local store. Nothing survives a restart; used for tests and for
/// callers that embed the engine without durable storage.
#[derive(Debug, Default)]
pub struct MemoryResultStore {
    results: RwLock<Vec<AssessmentResult>>,
}

impl MemoryResultStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultStore for MemoryResultStore {
    async fn append(&self, result: &AssessmentResult) -> Result<(), StorageError> {
        let mut results = self.results.write().await;
        if results.iter().any(|r| r.id == result.id) {
            return Err(StorageError::Duplicate {
                key: store_keys::result(result.instrument_id, result.id),
            });
        }
        results.push(result.clone());
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<AssessmentResult>, StorageError> {
        let mut results = self.results.read().await.clone();
        sort_newest_first(&mut results);
        Ok(results)
    }

    async fn get_by_instrument(
        &self,
        instrument: InstrumentId,
    ) -> Result<Vec<AssessmentResult>, StorageError> {
        let mut results: Vec<AssessmentResult> = self
            .results
            .read()
            .await
            .iter()
            .filter(|r| r.instrument_id == instrument)
            .cloned()
            .collect();
        sort_newest_first(&mut results);
        Ok(results)
    }

    async fn clear_history(&self, instrument: Option<InstrumentId>) -> Result<usize, StorageError> {
        let mut results = self.results.write().await;
        let before = results.len();
        match instrument {
            Some(instrument) => results.retain(|r| r.instrument_id != instrument),
            None => results.clear(),
        }
        Ok(before - results.len())
    }
}
