use wellmind_core::models::instrument::InstrumentId;
use wellmind_core::models::severity::SeverityLevel;

use crate::definition::{InstrumentDefinition, SeverityBand};

/// PSS-10: Perceived Stress Scale, 10-item form (Cohen, Kamarck & Mermelstein, 1983).
/// Items 0–4, total 0–40. Items 4, 5, 7 and 8 are positively worded and
/// reverse-scored. Bands follow the conventional low / moderate / high split.
pub static PSS10: InstrumentDefinition = InstrumentDefinition {
    id: InstrumentId::Pss10,
    name: "PSS-10",
    title: "Perceived Stress Scale",
    prompt: "In the last month, how often have you...",
    items: &[
        "been upset because of something that happened unexpectedly?",
        "felt that you were unable to control the important things in your life?",
        "felt nervous and stressed?",
        "felt confident about your ability to handle your personal problems?",
        "felt that things were going your way?",
        "found that you could not cope with all the things that you had to do?",
        "been able to control irritations in your life?",
        "felt that you were on top of things?",
        "been angered because of things that happened that were outside of your control?",
        "felt difficulties were piling up so high that you could not overcome them?",
    ],
    response_options: &[
        "Never",
        "Almost never",
        "Sometimes",
        "Fairly often",
        "Very often",
    ],
    reverse_scored_items: &[4, 5, 7, 8],
    severity_cutoffs: &[
        SeverityBand {
            low: 0,
            high: 13,
            level: SeverityLevel::Minimal,
            label: "Low perceived stress",
            interpretation: "Your answers suggest a low level of perceived stress.",
            recommendation: "You seem to be managing current demands well. Keep making time for rest and the activities that recharge you.",
        },
        SeverityBand {
            low: 14,
            high: 26,
            level: SeverityLevel::Moderate,
            label: "Moderate perceived stress",
            interpretation: "Your answers suggest a moderate level of perceived stress.",
            recommendation: "Stress-management practices such as meditation, planning breaks, and sharing the load with others can help. If stress is affecting your sleep or work, consider talking with a professional.",
        },
        SeverityBand {
            low: 27,
            high: 40,
            level: SeverityLevel::Severe,
            label: "High perceived stress",
            interpretation: "Your answers suggest a high level of perceived stress.",
            recommendation: "Please contact a doctor or mental health professional as soon as you can. Sustained high stress takes a toll, and if you feel overwhelmed or unsafe, reach out to a crisis line or emergency services now.",
        },
    ],
    crisis_item: None,
};
