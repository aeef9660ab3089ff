use serde::{Deserialize, Serialize};
use ts_rs::TS;

use wellmind_core::models::assessment::AssessmentResult;
use wellmind_core::models::instrument::InstrumentId;
use wellmind_core::models::severity::SeverityLevel;

/// Direction of the most recent change. Lower scores are better on every
/// supported instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TrendDirection {
    Improving,
    Stable,
    Worsening,
}

/// Dashboard summary of one instrument's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendSummary {
    pub instrument_id: InstrumentId,
    pub count: usize,
    pub latest_score: u32,
    pub latest_severity: SeverityLevel,
    pub latest_at: jiff::Timestamp,
    pub previous_score: Option<u32>,
    /// `latest_score - previous_score`.
    pub change: Option<i64>,
    pub direction: Option<TrendDirection>,
    pub lowest_score: u32,
    pub highest_score: u32,
    pub crisis_flagged_count: usize,
}

/// Summarize the history of one instrument. Results for other instruments
/// are ignored; input order does not matter. Returns `None` when there is no
/// history for the instrument.
pub fn trend(instrument: InstrumentId, results: &[AssessmentResult]) -> Option<TrendSummary> {
    let mut history: Vec<&AssessmentResult> = results
        .iter()
        .filter(|r| r.instrument_id == instrument)
        .collect();
    history.sort_by(|a, b| AssessmentResult::newest_first(a, b));

    let latest = *history.first()?;
    let previous_score = history.get(1).map(|r| r.total_score);
    let change = previous_score.map(|prev| i64::from(latest.total_score) - i64::from(prev));
    let direction = change.map(|delta| match delta {
        d if d < 0 => TrendDirection::Improving,
        0 => TrendDirection::Stable,
        _ => TrendDirection::Worsening,
    });

    Some(TrendSummary {
        instrument_id: instrument,
        count: history.len(),
        latest_score: latest.total_score,
        latest_severity: latest.severity,
        latest_at: latest.completed_at,
        previous_score,
        change,
        direction,
        lowest_score: history.iter().map(|r| r.total_score).min().unwrap_or_default(),
        highest_score: history.iter().map(|r| r.total_score).max().unwrap_or_default(),
        crisis_flagged_count: history.iter().filter(|r| r.crisis_flagged).count(),
    })
}
