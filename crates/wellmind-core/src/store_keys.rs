//! Storage key/path conventions.
//!
//! Pure string functions — no storage dependency. These define the canonical
//! layout of result documents, shared by the filesystem and S3 backends.

use uuid::Uuid;

use crate::models::instrument::InstrumentId;

pub const RESULTS_PREFIX: &str = "results/";

pub fn instrument_prefix(instrument: InstrumentId) -> String {
    format!("results/{instrument}/")
}

pub fn result(instrument: InstrumentId, id: Uuid) -> String {
    format!("results/{instrument}/{id}.json")
}

/// Whether a listed key names a result document (as opposed to a temp file
/// or some unrelated object sharing the prefix).
pub fn is_result_key(key: &str) -> bool {
    key.starts_with(RESULTS_PREFIX) && key.ends_with(".json")
}
