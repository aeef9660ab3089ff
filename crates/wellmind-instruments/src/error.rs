use thiserror::Error;

use wellmind_core::models::instrument::InstrumentId;
use wellmind_core::models::severity::SeverityLevel;

use crate::definition::ValidationError;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("invalid submission: {}", join_messages(.0))]
    InvalidSubmission(Vec<ValidationError>),

    #[error("score {score} is outside [0, {max}] for {instrument}")]
    ScoreOutOfRange {
        instrument: InstrumentId,
        score: u32,
        max: u32,
    },

    #[error("score {score} does not fall in the {severity} band of {instrument}")]
    SeverityMismatch {
        instrument: InstrumentId,
        severity: SeverityLevel,
        score: u32,
    },

    #[error("{instrument} has no {severity} band to interpret")]
    UnsupportedSeverity {
        instrument: InstrumentId,
        severity: SeverityLevel,
    },
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
