use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::instrument::InstrumentId;
use super::severity::SeverityLevel;

/// Raw answers keyed by 1-based item index.
pub type Responses = BTreeMap<u8, u8>;

/// A completed questionnaire as collected by the caller, before scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentSubmission {
    pub instrument_id: InstrumentId,
    pub responses: Responses,
}

impl AssessmentSubmission {
    pub fn new(instrument_id: InstrumentId, responses: Responses) -> Self {
        Self {
            instrument_id,
            responses,
        }
    }

    /// Build a submission from answers listed in item order (item 1 first).
    pub fn from_ordered(instrument_id: InstrumentId, answers: &[u8]) -> Self {
        let responses = answers
            .iter()
            .enumerate()
            .map(|(i, value)| ((i + 1) as u8, *value))
            .collect();
        Self::new(instrument_id, responses)
    }
}

/// A scored assessment. Created once by the scoring pipeline and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub id: Uuid,
    pub instrument_id: InstrumentId,
    pub total_score: u32,
    pub severity: SeverityLevel,
    pub crisis_flagged: bool,
    pub completed_at: jiff::Timestamp,
    /// Copy of the submitted answers, kept so results can be re-interpreted
    /// if cutoff tables are revised.
    pub raw_responses: Responses,
}

impl AssessmentResult {
    /// Ordering used by every history query: most recent first, ties broken
    /// by id so the order is total.
    pub fn newest_first(a: &AssessmentResult, b: &AssessmentResult) -> std::cmp::Ordering {
        b.completed_at
            .cmp(&a.completed_at)
            .then_with(|| b.id.cmp(&a.id))
    }
}
