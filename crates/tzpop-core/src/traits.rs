// crates/tzpop-core/src/traits.rs
use crate::error::Result;
use serde_json::Value;
use std::sync::Arc;

/// Source of the authoritative timezone list.
///
/// Called exactly once, when a [`Catalog`](crate::Catalog) is built. Any
/// failure must surface as [`TzError::CatalogUnavailable`](crate::TzError).
pub trait TimezoneListSource {
    fn fetch_timezones(&self) -> Result<Vec<String>>;
}

/// Remote time service.
///
/// Returns the raw JSON body for exactly one timezone. Picking the
/// `datetime` field out of it is the engine's job, so a fake only has to
/// hand back a `serde_json::Value`.
pub trait TimeLookup: Send + Sync {
    fn lookup(&self, timezone: &str) -> Result<Value>;
}

/// Key → count backend for popularity counters.
///
/// Implementors must make [`increment`](PopularityStore::increment) atomic
/// per key: two concurrent increments of the same key always add two.
/// A key that was never incremented reads as `0`.
pub trait PopularityStore: Send + Sync {
    /// Adds one to the counter for `key`, creating it at 1 if absent.
    /// Returns the new value.
    fn increment(&self, key: &str) -> Result<u64>;

    /// Current value for `key`, or `0` if it was never incremented.
    fn get(&self, key: &str) -> Result<u64>;
}

impl<S: PopularityStore + ?Sized> PopularityStore for Arc<S> {
    fn increment(&self, key: &str) -> Result<u64> {
        (**self).increment(key)
    }

    fn get(&self, key: &str) -> Result<u64> {
        (**self).get(key)
    }
}

impl<S: PopularityStore + ?Sized> PopularityStore for Box<S> {
    fn increment(&self, key: &str) -> Result<u64> {
        (**self).increment(key)
    }

    fn get(&self, key: &str) -> Result<u64> {
        (**self).get(key)
    }
}

impl<T: TimeLookup + ?Sized> TimeLookup for Arc<T> {
    fn lookup(&self, timezone: &str) -> Result<Value> {
        (**self).lookup(timezone)
    }
}

impl<T: TimeLookup + ?Sized> TimeLookup for Box<T> {
    fn lookup(&self, timezone: &str) -> Result<Value> {
        (**self).lookup(timezone)
    }
}
