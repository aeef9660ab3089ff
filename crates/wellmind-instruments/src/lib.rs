//! wellmind-instruments
//!
//! Screening instrument definitions and the scoring pipeline. Pure data and
//! pure functions — no storage dependency. Every instrument is a row in one
//! table of [`InstrumentDefinition`]s; the scorer, classifier, crisis detector
//! and interpreter are generic over that table.

pub mod assess;
pub mod crisis;
pub mod definition;
pub mod error;
pub mod instruments;
pub mod interpret;
pub mod scoring;
pub mod severity;
pub mod trend;

use wellmind_core::models::instrument::InstrumentId;

pub use definition::InstrumentDefinition;

/// Return all registered instrument definitions.
pub fn all_definitions() -> [&'static InstrumentDefinition; 3] {
    [
        &instruments::phq9::PHQ9,
        &instruments::gad7::GAD7,
        &instruments::pss10::PSS10,
    ]
}

/// Look up the definition for an instrument.
pub fn get_definition(id: InstrumentId) -> &'static InstrumentDefinition {
    match id {
        InstrumentId::Phq9 => &instruments::phq9::PHQ9,
        InstrumentId::Gad7 => &instruments::gad7::GAD7,
        InstrumentId::Pss10 => &instruments::pss10::PSS10,
    }
}
