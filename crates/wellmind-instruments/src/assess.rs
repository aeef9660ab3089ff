//! The end-to-end scoring pipeline: validate and score a submission, classify
//! it, check the crisis item, and explain the outcome.

use serde::Serialize;
use uuid::Uuid;

use wellmind_core::models::assessment::{AssessmentResult, AssessmentSubmission};
use wellmind_core::models::severity::SeverityLevel;

use crate::crisis::detect_crisis;
use crate::error::InstrumentError;
use crate::interpret::{Interpretation, interpret};
use crate::scoring::score;
use crate::severity::classify;

/// A freshly scored submission.
///
/// The interpretation is carried as its own `Result` so that a failure to
/// produce text never hides the score or the crisis flag.
#[derive(Debug)]
pub struct Assessment {
    pub result: AssessmentResult,
    pub interpretation: Result<Interpretation, InstrumentError>,
}

/// Score a submission and build the immutable result record.
pub fn assess(
    submission: &AssessmentSubmission,
    completed_at: jiff::Timestamp,
) -> Result<Assessment, InstrumentError> {
    let instrument = submission.instrument_id;
    let total_score = score(instrument, submission)?;
    let severity = classify(instrument, total_score)?;
    let crisis_flagged = detect_crisis(instrument, submission);

    let result = AssessmentResult {
        id: Uuid::new_v4(),
        instrument_id: instrument,
        total_score,
        severity,
        crisis_flagged,
        completed_at,
        raw_responses: submission.responses.clone(),
    };

    if crisis_flagged {
        tracing::warn!(
            id = %result.id,
            instrument = %instrument,
            score = total_score,
            severity = %severity,
            "assessment flagged for crisis support"
        );
    } else {
        tracing::info!(
            id = %result.id,
            instrument = %instrument,
            score = total_score,
            severity = %severity,
            "assessment scored"
        );
    }

    let interpretation = interpret(instrument, severity, total_score);
    if let Err(e) = &interpretation {
        tracing::error!(id = %result.id, error = %e, "failed to interpret assessment");
    }

    Ok(Assessment {
        result,
        interpretation,
    })
}

/// A stored result compared against the current scoring tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reinterpretation {
    pub result_id: Uuid,
    pub stored_score: u32,
    pub current_score: u32,
    pub stored_severity: SeverityLevel,
    pub current_severity: SeverityLevel,
    pub stored_crisis_flagged: bool,
    pub current_crisis_flagged: bool,
}

impl Reinterpretation {
    /// Whether the current tables disagree with what was stored.
    pub fn changed(&self) -> bool {
        self.stored_score != self.current_score
            || self.stored_severity != self.current_severity
            || self.stored_crisis_flagged != self.current_crisis_flagged
    }

    /// A crisis flag, once raised, stays raised.
    pub fn crisis_flagged(&self) -> bool {
        self.stored_crisis_flagged || self.current_crisis_flagged
    }
}

/// Re-score a stored result's raw responses with the current tables.
pub fn reinterpret(result: &AssessmentResult) -> Result<Reinterpretation, InstrumentError> {
    let instrument = result.instrument_id;
    let submission = AssessmentSubmission::new(instrument, result.raw_responses.clone());

    let current_score = score(instrument, &submission)?;
    let current_severity = classify(instrument, current_score)?;
    let current_crisis_flagged = detect_crisis(instrument, &submission);

    let reinterpretation = Reinterpretation {
        result_id: result.id,
        stored_score: result.total_score,
        current_score,
        stored_severity: result.severity,
        current_severity,
        stored_crisis_flagged: result.crisis_flagged,
        current_crisis_flagged,
    };

    if reinterpretation.changed() {
        tracing::info!(
            id = %result.id,
            instrument = %instrument,
            stored_score = result.total_score,
            current_score,
            "stored result differs under current scoring tables"
        );
    }

    Ok(reinterpretation)
}
