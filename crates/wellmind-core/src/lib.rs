//! wellmind-core
//!
//! Pure domain types and storage key conventions.
//! No I/O — this is the shared vocabulary of the Wellmind system.

pub mod error;
pub mod models;
pub mod store_keys;
