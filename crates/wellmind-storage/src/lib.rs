//! wellmind-storage
//!
//! The assessment result store: an append-only history of scored
//! assessments, with in-memory, local filesystem and S3 backends.

pub mod error;
pub mod fs;
pub mod memory;
pub mod objects;
pub mod s3;
pub mod store;

pub use store::ResultStore;
