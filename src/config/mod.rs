//! Application configuration: deploy-time settings with layered precedence
//! (file → environment).
//!
//! This is the read-only counterpart to the runtime
//! [`ConfigStore`](crate::application::ConfigStore): values come from the
//! deployment (a TOML file and `PALIO_*` environment variables), are never
//! persisted, and are never cached beyond the snapshot taken at load. The
//! two paths are deliberately distinct — operators change these by
//! redeploying, admins change runtime settings through the store.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use thiserror::Error;
use tracing::warn;

const LOCAL_CONFIG_BASENAME: &str = "palio";
const ENV_PREFIX: &str = "PALIO";

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("failed to load application configuration: {0}")]
    Load(#[from] ConfigError),
}

/// Immutable snapshot of the application-level configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    values: Config,
}

impl AppConfig {
    /// Load configuration from an optional TOML file plus the environment.
    ///
    /// When `config_file` is `None`, `palio.toml` in the working directory
    /// is read if present. Environment variables win over the file, e.g.
    /// `PALIO_UPLOAD_DIR` overrides `upload_dir`.
    pub fn load(config_file: Option<&Path>) -> Result<Self, AppConfigError> {
        let mut builder = Config::builder();
        builder = match config_file {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false)),
        };
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));

        Ok(Self {
            values: builder.build()?,
        })
    }

    /// Look up an application setting as a string. No coercion, no caching.
    pub fn get_app_config(&self, key: &str) -> Option<String> {
        match self.values.get_string(key) {
            Ok(value) => Some(value),
            Err(ConfigError::NotFound(_)) => None,
            Err(err) => {
                warn!(key, error = %err, "Unreadable application config value");
                None
            }
        }
    }

    /// [`get_app_config`](Self::get_app_config) with a fallback.
    pub fn get_app_config_or(&self, key: &str, default: &str) -> String {
        self.get_app_config(key)
            .unwrap_or_else(|| default.to_string())
    }
}
