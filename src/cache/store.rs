//! Cache storage for decoded configuration lookups.

use dashmap::DashMap;
use tracing::debug;

use crate::domain::config::ConfigValue;

const SOURCE: &str = "cache::store";

/// Outcome of a config lookup, as memoised.
///
/// `Missing` is the sentinel for "row absent or value empty": caching it
/// means a key that was never set costs one database read, not one per call.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedLookup {
    Hit(ConfigValue),
    Missing,
}

impl CachedLookup {
    pub fn into_option(self) -> Option<ConfigValue> {
        match self {
            CachedLookup::Hit(value) => Some(value),
            CachedLookup::Missing => None,
        }
    }
}

/// Process-wide memo map for config lookups, keyed by canonical key string.
///
/// Shared across requests behind an `Arc`. Writers invalidate single keys;
/// there is no read-side locking beyond the shard locks dashmap takes.
#[derive(Debug, Default)]
pub struct ConfigCache {
    entries: DashMap<String, CachedLookup>,
}

impl ConfigCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<CachedLookup> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    pub fn insert(&self, key: &str, lookup: CachedLookup) {
        self.entries.insert(key.to_string(), lookup);
    }

    /// Drop the entry for one key. A no-op when the key was never cached.
    pub fn invalidate(&self, key: &str) {
        let removed = self.entries.remove(key).is_some();
        debug!(
            target_module = SOURCE,
            key, removed, "Invalidated config cache entry"
        );
    }

    /// Drop every entry. Used by operational tooling, not the set path.
    pub fn clear(&self) {
        self.entries.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_then_insert_then_hit() {
        let cache = ConfigCache::new();
        assert_eq!(cache.get("theme"), None);

        cache.insert("theme", CachedLookup::Hit(ConfigValue::Str("dark".into())));
        assert_eq!(
            cache.get("theme"),
            Some(CachedLookup::Hit(ConfigValue::Str("dark".into())))
        );
    }

    #[test]
    fn missing_sentinel_is_cached_distinctly_from_absent() {
        let cache = ConfigCache::new();
        cache.insert("ghost", CachedLookup::Missing);

        // A cached negative is a hit on the sentinel, not a cache miss.
        assert_eq!(cache.get("ghost"), Some(CachedLookup::Missing));
        assert_eq!(CachedLookup::Missing.into_option(), None);
    }

    #[test]
    fn invalidate_removes_only_the_named_key() {
        let cache = ConfigCache::new();
        cache.insert("paused", CachedLookup::Hit(ConfigValue::Bool(true)));
        cache.insert("theme", CachedLookup::Hit(ConfigValue::Str("dark".into())));

        cache.invalidate("paused");
        assert_eq!(cache.get("paused"), None);
        assert!(cache.get("theme").is_some());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_empties_everything() {
        let cache = ConfigCache::new();
        cache.insert("a", CachedLookup::Missing);
        cache.insert("b", CachedLookup::Missing);
        cache.clear();
        assert_eq!(cache.len(), 0);
    }
}
