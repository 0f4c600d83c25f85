//! Application services layer.

pub mod config_store;
pub mod render;
pub mod repos;

pub use config_store::ConfigStore;
