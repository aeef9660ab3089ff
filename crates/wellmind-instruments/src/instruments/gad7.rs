use wellmind_core::models::instrument::InstrumentId;
use wellmind_core::models::severity::SeverityLevel;

use crate::definition::{InstrumentDefinition, SeverityBand};

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items, each 0–3. Total 0–21. Cutoffs per Spitzer et al. (2006).
pub static GAD7: InstrumentDefinition = InstrumentDefinition {
    id: InstrumentId::Gad7,
    name: "GAD-7",
    title: "Generalized Anxiety Disorder Scale",
    prompt: "Over the last 2 weeks, how often have you been bothered by the following problems?",
    items: &[
        "Feeling nervous, anxious, or on edge",
        "Not being able to stop or control worrying",
        "Worrying too much about different things",
        "Trouble relaxing",
        "Being so restless that it is hard to sit still",
        "Becoming easily annoyed or irritable",
        "Feeling afraid as if something awful might happen",
    ],
    response_options: &[
        "Not at all",
        "Several days",
        "More than half the days",
        "Nearly every day",
    ],
    reverse_scored_items: &[],
    severity_cutoffs: &[
        SeverityBand {
            low: 0,
            high: 4,
            level: SeverityLevel::Minimal,
            label: "Minimal anxiety",
            interpretation: "Your answers suggest minimal symptoms of anxiety.",
            recommendation: "Keep using what already helps you feel settled, such as breathing exercises, movement, and rest.",
        },
        SeverityBand {
            low: 5,
            high: 9,
            level: SeverityLevel::Mild,
            label: "Mild anxiety",
            interpretation: "Your answers suggest mild symptoms of anxiety.",
            recommendation: "Relaxation practices, guided breathing, and limiting caffeine can help. Check in again in two weeks.",
        },
        SeverityBand {
            low: 10,
            high: 14,
            level: SeverityLevel::Moderate,
            label: "Moderate anxiety",
            interpretation: "Your answers suggest moderate symptoms of anxiety.",
            recommendation: "Consider talking with a doctor or mental health professional. Structured approaches such as cognitive behavioural therapy work well for anxiety.",
        },
        SeverityBand {
            low: 15,
            high: 21,
            level: SeverityLevel::Severe,
            label: "Severe anxiety",
            interpretation: "Your answers suggest severe symptoms of anxiety.",
            recommendation: "Please contact a doctor or mental health professional as soon as possible. If you feel overwhelmed or unsafe, reach out to a crisis line or emergency services.",
        },
    ],
    crisis_item: None,
};
