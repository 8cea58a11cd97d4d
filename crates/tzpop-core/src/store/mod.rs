// crates/tzpop-core/src/store/mod.rs

//! # Popularity Stores
//!
//! Implementations of [`PopularityStore`]: an in-process concurrent map, a
//! flat JSON file, and (feature `redis`) a Redis server.

use crate::error::Result;
use crate::traits::PopularityStore;
use dashmap::DashMap;
use std::collections::BTreeMap;
use tracing::debug;

mod file;
#[cfg(feature = "redis")]
pub mod redis;

pub use file::JsonFileStore;

/// In-process counter store.
///
/// Increments go through the map's entry API, which holds the shard lock
/// for the read-modify-write, so concurrent increments never get lost.
#[derive(Debug, Default)]
pub struct MemoryStore {
    counts: DashMap<String, u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing counts.
    pub fn from_counts<I, K>(counts: I) -> Self
    where
        I: IntoIterator<Item = (K, u64)>,
        K: Into<String>,
    {
        Self {
            counts: counts.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Number of keys that have been incremented at least once.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Point-in-time copy of every counter, sorted by key.
    pub fn snapshot(&self) -> BTreeMap<String, u64> {
        self.counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }
}

impl PopularityStore for MemoryStore {
    fn increment(&self, key: &str) -> Result<u64> {
        let mut count = self.counts.entry(key.to_owned()).or_insert(0);
        *count = count.saturating_add(1);
        debug!(key, count = *count, "memory store increment");
        Ok(*count)
    }

    fn get(&self, key: &str) -> Result<u64> {
        Ok(self.counts.get(key).map_or(0, |count| *count))
    }
}
