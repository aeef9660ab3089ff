use std::future::Future;

use wellmind_core::models::assessment::AssessmentResult;
use wellmind_core::models::instrument::InstrumentId;

use crate::error::StorageError;

/// Durable, append-only history of scored assessments.
///
/// Every query returns results most recent first (see
/// [`AssessmentResult::newest_first`]) and reflects the store's current
/// state each time it is called.
pub trait ResultStore: Send + Sync {
    /// Persist one result atomically. A result whose id is already stored is
    /// rejected with [`StorageError::Duplicate`]; nothing is overwritten.
    fn append(
        &self,
        result: &AssessmentResult,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<AssessmentResult>, StorageError>> + Send;

    fn get_by_instrument(
        &self,
        instrument: InstrumentId,
    ) -> impl Future<Output = Result<Vec<AssessmentResult>, StorageError>> + Send;

    fn get_latest(
        &self,
        instrument: InstrumentId,
    ) -> impl Future<Output = Result<Option<AssessmentResult>, StorageError>> + Send {
        async move { Ok(self.get_by_instrument(instrument).await?.into_iter().next()) }
    }

    /// Results completed in `[from, until)`, optionally for one instrument.
    fn get_between(
        &self,
        instrument: Option<InstrumentId>,
        from: jiff::Timestamp,
        until: jiff::Timestamp,
    ) -> impl Future<Output = Result<Vec<AssessmentResult>, StorageError>> + Send {
        async move {
            let results = match instrument {
                Some(instrument) => self.get_by_instrument(instrument).await?,
                None => self.get_all().await?,
            };
            Ok(results
                .into_iter()
                .filter(|r| r.completed_at >= from && r.completed_at < until)
                .collect())
        }
    }

    /// Delete stored history, for one instrument or for all of them.
    /// Returns the number of results removed.
    ///
    /// This is the explicit user-initiated "clear history" operation; the
    /// scoring flow never calls it.
    fn clear_history(
        &self,
        instrument: Option<InstrumentId>,
    ) -> impl Future<Output = Result<usize, StorageError>> + Send;
}

/// Sort a batch of results into query order.
pub fn sort_newest_first(results: &mut [AssessmentResult]) {
    results.sort_by(AssessmentResult::newest_first);
}

/// The instruments a clear-history request applies to.
pub(crate) fn instruments_in_scope(instrument: Option<InstrumentId>) -> Vec<InstrumentId> {
    match instrument {
        Some(instrument) => vec![instrument],
        None => InstrumentId::ALL.to_vec(),
    }
}
