use wellmind_core::models::instrument::InstrumentId;
use wellmind_core::models::severity::SeverityLevel;

use crate::error::InstrumentError;

/// Map a total score to the instrument's severity band.
pub fn classify(instrument: InstrumentId, total_score: u32) -> Result<SeverityLevel, InstrumentError> {
    let definition = crate::get_definition(instrument);

    match definition.band_for_score(total_score) {
        Some(band) if total_score <= definition.max_score() => Ok(band.level),
        _ => {
            // Only reachable if the scorer was bypassed.
            tracing::error!(
                instrument = %instrument,
                score = total_score,
                max = definition.max_score(),
                "score outside instrument range"
            );
            Err(InstrumentError::ScoreOutOfRange {
                instrument,
                score: total_score,
                max: definition.max_score(),
            })
        }
    }
}
