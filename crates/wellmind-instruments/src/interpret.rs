use serde::{Deserialize, Serialize};
use ts_rs::TS;

use wellmind_core::models::instrument::InstrumentId;
use wellmind_core::models::severity::SeverityLevel;

use crate::error::InstrumentError;

/// Coarse recommendation level callers use to choose what to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ActionTier {
    /// Keep up existing routines; nothing to suggest beyond general wellbeing.
    SelfCare,
    /// Suggest self-help interventions.
    SelfHelp,
    /// Nudge toward talking with a professional.
    ProfessionalConsult,
    /// Urge prompt professional or emergency contact.
    UrgentCare,
}

impl ActionTier {
    pub fn for_severity(severity: SeverityLevel) -> Self {
        match severity {
            SeverityLevel::None | SeverityLevel::Minimal => ActionTier::SelfCare,
            SeverityLevel::Mild => ActionTier::SelfHelp,
            SeverityLevel::Moderate | SeverityLevel::ModeratelySevere => {
                ActionTier::ProfessionalConsult
            }
            SeverityLevel::Severe => ActionTier::UrgentCare,
        }
    }
}

/// User-facing explanation of a score. Presentational data only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub instrument_id: InstrumentId,
    pub severity: SeverityLevel,
    /// Clinical band label (e.g., "Moderately severe depression").
    pub label: String,
    pub interpretation_text: String,
    pub recommendation_text: String,
    pub recommended_action_tier: ActionTier,
}

/// Explain what a severity band means and what to do about it.
///
/// Keyed on `(instrument, severity)` only; raw responses are never consulted.
/// `total_score` is quoted in the text and must lie inside the band.
pub fn interpret(
    instrument: InstrumentId,
    severity: SeverityLevel,
    total_score: u32,
) -> Result<Interpretation, InstrumentError> {
    let definition = crate::get_definition(instrument);
    let band = definition
        .band_for_level(severity)
        .ok_or(InstrumentError::UnsupportedSeverity {
            instrument,
            severity,
        })?;
    if !band.contains(total_score) {
        return Err(InstrumentError::SeverityMismatch {
            instrument,
            severity,
            score: total_score,
        });
    }

    Ok(Interpretation {
        instrument_id: instrument,
        severity,
        label: band.label.to_string(),
        interpretation_text: format!(
            "{} score {} out of {}. {}",
            definition.name,
            total_score,
            definition.max_score(),
            band.interpretation
        ),
        recommendation_text: band.recommendation.to_string(),
        recommended_action_tier: ActionTier::for_severity(severity),
    })
}
