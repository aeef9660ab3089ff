use wellmind_core::models::instrument::InstrumentId;
use wellmind_core::models::severity::SeverityLevel;

use crate::definition::{CrisisItem, InstrumentDefinition, SeverityBand};

/// PHQ-9: Patient Health Questionnaire, depression module.
/// 9 items, each 0–3. Total 0–27. Cutoffs per Kroenke, Spitzer & Williams (2001).
/// Item 9 asks about thoughts of self-harm; any answer above "Not at all"
/// raises the crisis flag.
pub static PHQ9: InstrumentDefinition = InstrumentDefinition {
    id: InstrumentId::Phq9,
    name: "PHQ-9",
    title: "Patient Health Questionnaire",
    prompt: "Over the last 2 weeks, how often have you been bothered by any of the following problems?",
    items: &[
        "Little interest or pleasure in doing things",
        "Feeling down, depressed, or hopeless",
        "Trouble falling or staying asleep, or sleeping too much",
        "Feeling tired or having little energy",
        "Poor appetite or overeating",
        "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
        "Trouble concentrating on things, such as reading the newspaper or watching television",
        "Moving or speaking so slowly that other people could have noticed, or the opposite: being so fidgety or restless that you have been moving around a lot more than usual",
        "Thoughts that you would be better off dead, or of hurting yourself in some way",
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
            label: "None-minimal depression",
            interpretation: "Your answers suggest few or no symptoms of depression.",
            recommendation: "Keep up the routines that support your mood: regular sleep, movement, and time with people you care about.",
        },
        SeverityBand {
            low: 5,
            high: 9,
            level: SeverityLevel::Mild,
            label: "Mild depression",
            interpretation: "Your answers suggest mild symptoms of depression.",
            recommendation: "Self-help practices such as journaling, behavioural activation, and mindfulness can help. Repeat this check-in in two weeks to see how things change.",
        },
        SeverityBand {
            low: 10,
            high: 14,
            level: SeverityLevel::Moderate,
            label: "Moderate depression",
            interpretation: "Your answers suggest moderate symptoms of depression.",
            recommendation: "Consider talking with a doctor or mental health professional about how you have been feeling. Self-help practices can complement, but not replace, that conversation.",
        },
        SeverityBand {
            low: 15,
            high: 19,
            level: SeverityLevel::ModeratelySevere,
            label: "Moderately severe depression",
            interpretation: "Your answers suggest moderately severe symptoms of depression.",
            recommendation: "We recommend contacting a doctor or mental health professional soon. Treatment for depression is effective and you do not have to manage this alone.",
        },
        SeverityBand {
            low: 20,
            high: 27,
            level: SeverityLevel::Severe,
            label: "Severe depression",
            interpretation: "Your answers suggest severe symptoms of depression.",
            recommendation: "Please reach out to a doctor or mental health professional as soon as possible. If you feel unsafe, contact emergency services or a crisis line now.",
        },
    ],
    crisis_item: Some(CrisisItem {
        item: 9,
        threshold: 1,
    }),
};
