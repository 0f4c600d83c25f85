//! Support services for the Palio competition platform.
//!
//! Three concerns live here, shared by the platform's request handlers:
//!
//! - [`application::ConfigStore`]: a read-through cached key/value store
//!   over the `configs` table, with explicit per-key invalidation on write.
//! - [`domain::filename::secure_filename`]: upload filename sanitisation.
//! - [`application::render`]: markdown-to-HTML rendering with the
//!   platform's GFM extension set.
//!
//! Plus [`config::AppConfig`], the read-only deploy-time configuration
//! layer, which is a deliberately separate path from `ConfigStore`.
//!
//! The crate has no HTTP or CLI surface; the embedding application owns
//! the request lifecycle and the tracing subscriber.

pub mod application;
pub mod cache;
pub mod config;
pub mod domain;
pub mod infra;

pub use application::ConfigStore;
pub use application::render::render_service;
pub use cache::ConfigCache;
pub use config::AppConfig;
pub use domain::config::{ConfigKey, ConfigValue, SettingKey, decode_config_value};
pub use domain::filename::secure_filename;
