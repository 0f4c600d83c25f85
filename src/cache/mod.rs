//! Palio config cache.
//!
//! A process-wide memoisation layer for the runtime configuration store.
//! Lookups read through to persistence on a miss and stay cached until the
//! corresponding `set` invalidates them; negative lookups are cached too,
//! so absent keys do not hit the database on every read.
//!
//! There is no TTL and no eviction: the config table is small and its rows
//! only change through [`ConfigStore::set`](crate::application::ConfigStore::set),
//! which invalidates synchronously after commit.

mod store;

pub use store::{CachedLookup, ConfigCache};
