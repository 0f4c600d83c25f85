//! Domain layer types and invariants.

pub mod config;
pub mod filename;
