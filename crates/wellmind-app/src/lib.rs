//! wellmind-app library root.
//!
//! Application wiring: config file, store selection, the assessment service
//! and the command handlers behind the `wellmind` binary. Exposed as a
//! library so integration tests can drive the service and commands directly.

pub mod cli;
pub mod commands;
pub mod config;
pub mod service;
pub mod store;
