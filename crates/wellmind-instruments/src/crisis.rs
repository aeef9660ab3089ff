use wellmind_core::models::assessment::AssessmentSubmission;
use wellmind_core::models::instrument::InstrumentId;

/// Whether the submission must surface crisis-support resources.
///
/// Looks only at the instrument's designated crisis item, never at the total:
/// a single high-risk answer is not diluted by mild answers elsewhere.
pub fn detect_crisis(instrument: InstrumentId, submission: &AssessmentSubmission) -> bool {
    let Some(crisis_item) = crate::get_definition(instrument).crisis_item else {
        return false;
    };

    submission
        .responses
        .get(&crisis_item.item)
        .is_some_and(|&raw| raw >= crisis_item.threshold)
}
