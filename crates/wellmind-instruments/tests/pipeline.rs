use jiff::{Timestamp, ToSpan};
use uuid::Uuid;
use wellmind_core::models::assessment::{AssessmentResult, AssessmentSubmission};
use wellmind_core::models::instrument::InstrumentId;
use wellmind_core::models::severity::SeverityLevel;
use wellmind_instruments::assess::{assess, reinterpret};
use wellmind_instruments::error::InstrumentError;
use wellmind_instruments::get_definition;
use wellmind_instruments::interpret::{ActionTier, interpret};
use wellmind_instruments::trend::{TrendDirection, trend};

fn at(seconds: i64) -> Timestamp {
    Timestamp::from_second(1_760_000_000 + seconds).unwrap()
}

fn stored(instrument: InstrumentId, total_score: u32, completed_at: Timestamp) -> AssessmentResult {
    AssessmentResult {
        id: Uuid::new_v4(),
        instrument_id: instrument,
        total_score,
        severity: SeverityLevel::Mild,
        crisis_flagged: false,
        completed_at,
        raw_responses: Default::default(),
    }
}

#[test]
fn assess_builds_a_complete_result() {
    let submission =
        AssessmentSubmission::from_ordered(InstrumentId::Phq9, &[2, 2, 1, 1, 1, 1, 1, 1, 1]);
    let completed_at = at(0);

    let assessment = assess(&submission, completed_at).unwrap();
    let result = &assessment.result;
    assert_eq!(result.instrument_id, InstrumentId::Phq9);
    assert_eq!(result.total_score, 11);
    assert_eq!(result.severity, SeverityLevel::Moderate);
    assert!(result.crisis_flagged);
    assert_eq!(result.completed_at, completed_at);
    assert_eq!(result.raw_responses, submission.responses);

    let interpretation = assessment.interpretation.unwrap();
    assert_eq!(interpretation.recommended_action_tier, ActionTier::ProfessionalConsult);
    assert_eq!(interpretation.label, "Moderate depression");
}

#[test]
fn assess_gives_each_result_a_new_id() {
    let submission = AssessmentSubmission::from_ordered(InstrumentId::Gad7, &[1; 7]);
    let first = assess(&submission, at(0)).unwrap();
    let second = assess(&submission, at(0)).unwrap();
    assert_ne!(first.result.id, second.result.id);
    assert_eq!(first.result.total_score, second.result.total_score);
}

#[test]
fn assess_rejects_invalid_submissions_before_scoring() {
    let submission = AssessmentSubmission::from_ordered(InstrumentId::Gad7, &[1; 6]);
    let err = assess(&submission, at(0)).unwrap_err();
    assert!(matches!(err, InstrumentError::InvalidSubmission(_)));
}

#[test]
fn interpretation_mentions_score_and_maximum() {
    let interpretation = interpret(InstrumentId::Gad7, SeverityLevel::Mild, 7).unwrap();
    assert!(interpretation.interpretation_text.starts_with("GAD-7 score 7 out of 21."));
    assert_eq!(interpretation.recommended_action_tier, ActionTier::SelfHelp);
    assert!(!interpretation.recommendation_text.is_empty());
}

#[test]
fn action_tiers_escalate_with_severity() {
    let tiers: Vec<ActionTier> = [
        SeverityLevel::Minimal,
        SeverityLevel::Mild,
        SeverityLevel::Moderate,
        SeverityLevel::ModeratelySevere,
        SeverityLevel::Severe,
    ]
    .into_iter()
    .map(|s| {
        let score = get_definition(InstrumentId::Phq9).band_for_level(s).unwrap().low;
        interpret(InstrumentId::Phq9, s, score).unwrap().recommended_action_tier
    })
    .collect();

    assert_eq!(
        tiers,
        vec![
            ActionTier::SelfCare,
            ActionTier::SelfHelp,
            ActionTier::ProfessionalConsult,
            ActionTier::ProfessionalConsult,
            ActionTier::UrgentCare,
        ]
    );
}

#[test]
fn interpret_rejects_unreachable_severity() {
    let err = interpret(InstrumentId::Gad7, SeverityLevel::ModeratelySevere, 12).unwrap_err();
    assert!(matches!(
        err,
        InstrumentError::UnsupportedSeverity {
            instrument: InstrumentId::Gad7,
            severity: SeverityLevel::ModeratelySevere,
        }
    ));
}

#[test]
fn interpret_rejects_score_outside_the_band() {
    let err = interpret(InstrumentId::Phq9, SeverityLevel::Severe, 0).unwrap_err();
    assert!(matches!(
        err,
        InstrumentError::SeverityMismatch {
            instrument: InstrumentId::Phq9,
            severity: SeverityLevel::Severe,
            score: 0,
        }
    ));
}

#[test]
fn pss10_moderate_stress_suggests_a_professional() {
    let interpretation = interpret(InstrumentId::Pss10, SeverityLevel::Moderate, 20).unwrap();
    assert_eq!(interpretation.recommended_action_tier, ActionTier::ProfessionalConsult);
    assert!(interpretation.recommendation_text.contains("professional"));
}

#[test]
fn severe_bands_use_urgent_contact_wording() {
    for instrument in InstrumentId::ALL {
        let max = get_definition(instrument).max_score();
        let interpretation = interpret(instrument, SeverityLevel::Severe, max).unwrap();
        assert_eq!(interpretation.recommended_action_tier, ActionTier::UrgentCare);
        assert!(
            interpretation.recommendation_text.contains("crisis line")
                && interpretation.recommendation_text.contains("emergency services"),
            "{instrument}: {}",
            interpretation.recommendation_text
        );
    }
}

#[test]
fn reinterpret_matches_freshly_scored_result() {
    let submission =
        AssessmentSubmission::from_ordered(InstrumentId::Pss10, &[3, 2, 3, 1, 1, 2, 2, 1, 3, 2]);
    let assessment = assess(&submission, at(0)).unwrap();

    let reinterpretation = reinterpret(&assessment.result).unwrap();
    assert!(!reinterpretation.changed());
    assert_eq!(reinterpretation.current_score, assessment.result.total_score);
}

#[test]
fn reinterpret_detects_stale_records_and_keeps_crisis_flag() {
    let submission = AssessmentSubmission::from_ordered(InstrumentId::Phq9, &[0; 9]);
    let mut result = assess(&submission, at(0)).unwrap().result;
    result.total_score = 12;
    result.severity = SeverityLevel::Moderate;
    result.crisis_flagged = true;

    let reinterpretation = reinterpret(&result).unwrap();
    assert!(reinterpretation.changed());
    assert_eq!(reinterpretation.current_score, 0);
    assert_eq!(reinterpretation.current_severity, SeverityLevel::Minimal);
    assert!(!reinterpretation.current_crisis_flagged);
    assert!(reinterpretation.crisis_flagged());
}

#[test]
fn trend_compares_latest_with_previous() {
    let results = vec![
        stored(InstrumentId::Phq9, 8, at(0)),
        stored(InstrumentId::Phq9, 14, at(60)),
        stored(InstrumentId::Phq9, 11, at(120)),
        stored(InstrumentId::Gad7, 2, at(180)),
    ];

    let summary = trend(InstrumentId::Phq9, &results).unwrap();
    assert_eq!(summary.count, 3);
    assert_eq!(summary.latest_score, 11);
    assert_eq!(summary.latest_at, at(120));
    assert_eq!(summary.previous_score, Some(14));
    assert_eq!(summary.change, Some(-3));
    assert_eq!(summary.direction, Some(TrendDirection::Improving));
    assert_eq!(summary.lowest_score, 8);
    assert_eq!(summary.highest_score, 14);
}

#[test]
fn trend_with_single_result_has_no_direction() {
    let results = vec![stored(InstrumentId::Gad7, 6, at(0))];
    let summary = trend(InstrumentId::Gad7, &results).unwrap();
    assert_eq!(summary.previous_score, None);
    assert_eq!(summary.direction, None);
}

#[test]
fn trend_counts_crisis_flags_and_detects_worsening() {
    let mut flagged = stored(InstrumentId::Phq9, 9, at(0) + 1.hour());
    flagged.crisis_flagged = true;
    let results = vec![flagged, stored(InstrumentId::Phq9, 4, at(0))];

    let summary = trend(InstrumentId::Phq9, &results).unwrap();
    assert_eq!(summary.direction, Some(TrendDirection::Worsening));
    assert_eq!(summary.crisis_flagged_count, 1);
}

#[test]
fn trend_without_history_is_none() {
    let results = vec![stored(InstrumentId::Gad7, 6, at(0))];
    assert!(trend(InstrumentId::Pss10, &results).is_none());
}
