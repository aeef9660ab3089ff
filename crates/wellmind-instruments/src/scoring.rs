use wellmind_core::models::assessment::AssessmentSubmission;
use wellmind_core::models::instrument::InstrumentId;

use crate::definition::{InstrumentDefinition, ValidationError};
use crate::error::InstrumentError;

/// Validate a submission against an instrument and sum its item scores.
///
/// The whole submission is checked before anything is summed; any missing,
/// unknown or out-of-range item rejects it with
/// [`InstrumentError::InvalidSubmission`] listing every problem found.
pub fn score(
    instrument: InstrumentId,
    submission: &AssessmentSubmission,
) -> Result<u32, InstrumentError> {
    let definition = crate::get_definition(instrument);

    let mut errors = Vec::new();
    if submission.instrument_id != instrument {
        errors.push(ValidationError::WrongInstrument {
            expected: instrument,
            submitted: submission.instrument_id,
        });
    }
    errors.extend(definition.validate_responses(&submission.responses));

    if !errors.is_empty() {
        tracing::warn!(
            instrument = %instrument,
            problems = errors.len(),
            "rejected assessment submission"
        );
        return Err(InstrumentError::InvalidSubmission(errors));
    }

    Ok(submission
        .responses
        .iter()
        .map(|(&item, &raw)| u32::from(effective_value(definition, item, raw)))
        .sum())
}

/// The value an item contributes to the total: the raw response, or its
/// mirror on the response scale for reverse-scored items.
pub fn effective_value(definition: &InstrumentDefinition, item: u8, raw: u8) -> u8 {
    if definition.is_reverse_scored(item) {
        definition.max_response().saturating_sub(raw)
    } else {
        raw
    }
}
