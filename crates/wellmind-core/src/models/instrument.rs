use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The screening instruments the engine knows how to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentId {
    /// Patient Health Questionnaire, 9 items (depression).
    Phq9,
    /// Generalized Anxiety Disorder scale, 7 items.
    Gad7,
    /// Perceived Stress Scale, 10 items.
    Pss10,
}

impl InstrumentId {
    pub const ALL: [InstrumentId; 3] = [InstrumentId::Phq9, InstrumentId::Gad7, InstrumentId::Pss10];

    /// Stable identifier used in storage keys and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentId::Phq9 => "phq9",
            InstrumentId::Gad7 => "gad7",
            InstrumentId::Pss10 => "pss10",
        }
    }
}

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstrumentId {
    type Err = CoreError;

    /// Accepts the storage identifier as well as the printed names
    /// ("PHQ-9", "gad_7", ...), ignoring case and separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        InstrumentId::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownInstrument(s.to_string()))
    }
}
