use thiserror::Error;

use wellmind_core::models::assessment::{AssessmentResult, AssessmentSubmission};
use wellmind_core::models::instrument::InstrumentId;
use wellmind_instruments::assess::{Assessment, Reinterpretation, assess, reinterpret};
use wellmind_instruments::error::InstrumentError;
use wellmind_instruments::trend::{TrendSummary, trend};
use wellmind_storage::ResultStore;
use wellmind_storage::error::StorageError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Scoring(#[from] InstrumentError),

    /// The assessment was scored but not saved. The computed assessment is
    /// handed back so the caller can show it and retry.
    #[error("could not save assessment: {source}")]
    Persistence {
        assessment: Box<Assessment>,
        source: StorageError,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Scores submissions and records them in an injected result store.
pub struct AssessmentService<S> {
    store: S,
}

impl<S: ResultStore> AssessmentService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Score a submission completed now and append it to the history.
    pub async fn submit(&self, submission: &AssessmentSubmission) -> Result<Assessment, ServiceError> {
        self.submit_at(submission, jiff::Timestamp::now()).await
    }

    pub async fn submit_at(
        &self,
        submission: &AssessmentSubmission,
        completed_at: jiff::Timestamp,
    ) -> Result<Assessment, ServiceError> {
        let assessment = assess(submission, completed_at)?;

        if let Err(source) = self.store.append(&assessment.result).await {
            tracing::error!(
                id = %assessment.result.id,
                instrument = %assessment.result.instrument_id,
                crisis = assessment.result.crisis_flagged,
                error = %source,
                "failed to save assessment"
            );
            return Err(ServiceError::Persistence {
                assessment: Box::new(assessment),
                source,
            });
        }

        Ok(assessment)
    }

    /// Retry saving an assessment whose first append failed.
    pub async fn retry_save(&self, assessment: &Assessment) -> Result<(), StorageError> {
        self.store.append(&assessment.result).await
    }

    pub async fn history(
        &self,
        instrument: Option<InstrumentId>,
    ) -> Result<Vec<AssessmentResult>, StorageError> {
        match instrument {
            Some(instrument) => self.store.get_by_instrument(instrument).await,
            None => self.store.get_all().await,
        }
    }

    pub async fn history_between(
        &self,
        instrument: Option<InstrumentId>,
        from: jiff::Timestamp,
        until: jiff::Timestamp,
    ) -> Result<Vec<AssessmentResult>, StorageError> {
        self.store.get_between(instrument, from, until).await
    }

    pub async fn latest(&self, instrument: InstrumentId) -> Result<Option<AssessmentResult>, StorageError> {
        self.store.get_latest(instrument).await
    }

    pub async fn trend(&self, instrument: InstrumentId) -> Result<Option<TrendSummary>, StorageError> {
        let history = self.store.get_by_instrument(instrument).await?;
        Ok(trend(instrument, &history))
    }

    /// Re-score stored results with the current tables.
    pub async fn reinterpret_history(
        &self,
        instrument: Option<InstrumentId>,
    ) -> Result<Vec<Reinterpretation>, ServiceError> {
        let history = self.history(instrument).await?;
        let reinterpretations = history
            .iter()
            .map(reinterpret)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(reinterpretations)
    }

    pub async fn clear_history(&self, instrument: Option<InstrumentId>) -> Result<usize, StorageError> {
        let removed = self.store.clear_history(instrument).await?;
        tracing::warn!(
            instrument = instrument.map(|i| i.as_str()).unwrap_or("all"),
            removed,
            "assessment history cleared"
        );
        Ok(removed)
    }
}
