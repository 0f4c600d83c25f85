//! Cached runtime configuration store.

use std::sync::Arc;

use tracing::debug;

use crate::application::repos::{ConfigsRepo, RepoError};
use crate::cache::{CachedLookup, ConfigCache};
use crate::domain::config::{ConfigKey, ConfigRecord, ConfigValue, decode_config_value};

const SOURCE: &str = "application::config_store";

/// Read-through cached accessor over the `configs` table.
///
/// Reads decode stored strings into [`ConfigValue`] at the boundary and
/// memoise the outcome per canonical key, including negative lookups.
/// Writes upsert, commit, then invalidate exactly the written key, so a
/// `get` issued after `set` returns never sees the pre-update value.
///
/// The cache is shared process-wide; pass the same `Arc<ConfigCache>` to
/// every store constructed over the same database.
pub struct ConfigStore<R> {
    repo: R,
    cache: Arc<ConfigCache>,
}

impl<R: ConfigsRepo> ConfigStore<R> {
    pub fn new(repo: R, cache: Arc<ConfigCache>) -> Self {
        Self { repo, cache }
    }

    /// Look up a setting. Returns `None` when the key has no row or the
    /// stored value is empty — the two are indistinguishable by contract.
    pub async fn get(&self, key: impl Into<ConfigKey>) -> Result<Option<ConfigValue>, RepoError> {
        let key = key.into();
        let raw = key.as_str();

        if let Some(lookup) = self.cache.get(raw) {
            debug!(target_module = SOURCE, key = raw, "Config cache hit");
            return Ok(lookup.into_option());
        }

        let record = self.repo.find_by_key(raw).await?;
        let lookup = match record.and_then(|record| record.value) {
            Some(stored) => match decode_config_value(&stored) {
                Some(value) => CachedLookup::Hit(value),
                // Empty stored value reads as absent.
                None => CachedLookup::Missing,
            },
            None => CachedLookup::Missing,
        };

        debug!(
            target_module = SOURCE,
            key = raw,
            found = matches!(lookup, CachedLookup::Hit(_)),
            "Config cache miss, populated from store"
        );
        self.cache.insert(raw, lookup.clone());
        Ok(lookup.into_option())
    }

    /// [`get`](Self::get) with a fallback for absent or empty values.
    pub async fn get_or(
        &self,
        key: impl Into<ConfigKey>,
        default: ConfigValue,
    ) -> Result<ConfigValue, RepoError> {
        Ok(self.get(key).await?.unwrap_or(default))
    }

    /// Upsert a setting and synchronously invalidate its cache entry.
    ///
    /// Invalidation uses the same canonical key as reads; the commit
    /// happens inside the repo before the invalidation runs.
    pub async fn set(
        &self,
        key: impl Into<ConfigKey>,
        value: impl Into<String>,
    ) -> Result<ConfigRecord, RepoError> {
        let key = key.into();
        let raw = key.as_str();

        let record = self.repo.upsert(raw, &value.into()).await?;
        self.cache.invalidate(raw);
        debug!(target_module = SOURCE, key = raw, "Config updated");
        Ok(record)
    }
}
