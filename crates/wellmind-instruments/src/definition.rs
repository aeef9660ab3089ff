use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use wellmind_core::models::assessment::Responses;
use wellmind_core::models::instrument::InstrumentId;
use wellmind_core::models::severity::SeverityLevel;

/// Static description of a screening instrument: its items, response scale,
/// reverse-scored items, cutoff table and crisis item.
#[derive(Debug, Serialize)]
pub struct InstrumentDefinition {
    pub id: InstrumentId,
    /// Short printed name (e.g., "PHQ-9").
    pub name: &'static str,
    pub title: &'static str,
    /// Stem shown before the items.
    pub prompt: &'static str,
    /// Item text, in order. Item `i` (1-based) is `items[i - 1]`.
    pub items: &'static [&'static str],
    /// Likert option labels; the option at position `n` scores `n`.
    pub response_options: &'static [&'static str],
    /// 1-based indices of items worded in the opposite valence.
    pub reverse_scored_items: &'static [u8],
    /// Ordered, contiguous bands covering `[0, max_score]`.
    pub severity_cutoffs: &'static [SeverityBand],
    pub crisis_item: Option<CrisisItem>,
}

/// One row of a cutoff table. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeverityBand {
    pub low: u32,
    pub high: u32,
    pub level: SeverityLevel,
    /// Clinical label as printed in the instrument literature.
    pub label: &'static str,
    pub interpretation: &'static str,
    pub recommendation: &'static str,
}

impl SeverityBand {
    pub fn contains(&self, score: u32) -> bool {
        (self.low..=self.high).contains(&score)
    }
}

/// An item whose raw response alone can raise the crisis flag.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CrisisItem {
    pub item: u8,
    /// Raw responses at or above this value raise the flag.
    pub threshold: u8,
}

impl InstrumentDefinition {
    pub fn item_count(&self) -> u8 {
        self.items.len() as u8
    }

    /// Number of points on the Likert scale (4 or 5).
    pub fn response_scale(&self) -> u8 {
        self.response_options.len() as u8
    }

    /// Highest legal raw response for any item.
    pub fn max_response(&self) -> u8 {
        self.response_scale() - 1
    }

    pub fn max_score(&self) -> u32 {
        u32::from(self.item_count()) * u32::from(self.max_response())
    }

    pub fn is_reverse_scored(&self, item: u8) -> bool {
        self.reverse_scored_items.contains(&item)
    }

    pub fn band_for_score(&self, score: u32) -> Option<&'static SeverityBand> {
        let cutoffs: &'static [SeverityBand] = self.severity_cutoffs;
        cutoffs.iter().find(|b| b.contains(score))
    }

    pub fn band_for_level(&self, level: SeverityLevel) -> Option<&'static SeverityBand> {
        let cutoffs: &'static [SeverityBand] = self.severity_cutoffs;
        cutoffs.iter().find(|b| b.level == level)
    }

    /// Check a set of responses against this instrument's rules.
    ///
    /// Every problem is reported; an empty result means the responses can be
    /// scored.
    pub fn validate_responses(&self, responses: &Responses) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        for item in 1..=self.item_count() {
            match responses.get(&item) {
                None => errors.push(ValidationError::MissingItem {
                    instrument: self.id,
                    item,
                }),
                Some(&value) if value > self.max_response() => {
                    errors.push(ValidationError::OutOfRange {
                        instrument: self.id,
                        item,
                        value,
                        max: self.max_response(),
                    })
                }
                Some(_) => {}
            }
        }

        for &item in responses.keys() {
            if item == 0 || item > self.item_count() {
                errors.push(ValidationError::UnknownItem {
                    instrument: self.id,
                    item,
                    item_count: self.item_count(),
                });
            }
        }

        errors
    }
}

/// A single reason a submission cannot be scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationError {
    #[error("{instrument}: item {item} is unanswered")]
    MissingItem { instrument: InstrumentId, item: u8 },

    #[error("{instrument}: item {item} does not exist (items are 1..={item_count})")]
    UnknownItem {
        instrument: InstrumentId,
        item: u8,
        item_count: u8,
    },

    #[error("{instrument}: item {item} response {value} is outside range [0, {max}]")]
    OutOfRange {
        instrument: InstrumentId,
        item: u8,
        value: u8,
        max: u8,
    },

    #[error("submission is for {submitted}, expected {expected}")]
    WrongInstrument {
        expected: InstrumentId,
        submitted: InstrumentId,
    },
}
