// crates/tzpop-core/src/engine.rs

//! # Query Engine
//!
//! Answers "what time is it in T" and "how popular is T (or region T)".
//! Holds the catalog and the two collaborators; keeps no other state.

use crate::catalog::Catalog;
use crate::common::PopularityBreakdown;
use crate::config::CountPolicy;
use crate::error::{Result, TzError};
use crate::text;
use crate::traits::{PopularityStore, TimeLookup};
use tracing::{debug, warn};

pub struct QueryEngine<S, T> {
    catalog: Catalog,
    store: S,
    time: T,
    policy: CountPolicy,
}

impl<S: PopularityStore, T: TimeLookup> QueryEngine<S, T> {
    /// Build an engine counting every attempted time query.
    pub fn new(catalog: Catalog, store: S, time: T) -> Self {
        Self {
            catalog,
            store,
            time,
            policy: CountPolicy::default(),
        }
    }

    pub fn with_count_policy(mut self, policy: CountPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Exact, case-sensitive catalog membership.
    pub fn is_valid_timezone(&self, s: &str) -> bool {
        self.catalog.contains(s)
    }

    /// Current wall-clock time at `timezone`, e.g. `07 Jan 2024 14:05`.
    ///
    /// Under [`CountPolicy::OnAttempt`] the counter is bumped before the
    /// lookup, so a query that later fails with
    /// [`TzError::MalformedTimeResponse`], [`TzError::UnparseableTimestamp`]
    /// or [`TzError::TimeLookupFailed`] has still been counted. Unknown
    /// timezones are never counted.
    pub fn current_time_at(&self, timezone: &str) -> Result<String> {
        if !self.is_valid_timezone(timezone) {
            return Err(TzError::UnknownTimezone(timezone.to_owned()));
        }

        if self.policy == CountPolicy::OnAttempt {
            self.count(timezone)?;
        }

        let formatted = self
            .time
            .lookup(timezone)
            .and_then(|body| text::display_time(&body))
            .inspect_err(|e| warn!(timezone, error = %e, "time query failed"))?;

        if self.policy == CountPolicy::OnSuccess {
            self.count(timezone)?;
        }
        Ok(formatted)
    }

    /// Query count for an exact timezone, or the sum over a region.
    ///
    /// An exact catalog entry is read directly. Anything else is treated as
    /// a single-segment region and summed over every entry in it; no match
    /// (including multi-segment input such as `America/Argentina`) gives 0
    /// without touching the store.
    pub fn popularity_of(&self, tz_or_prefix: &str) -> Result<u64> {
        if self.is_valid_timezone(tz_or_prefix) {
            return self.store.get(tz_or_prefix);
        }
        self.catalog
            .region_members(tz_or_prefix)
            .try_fold(0u64, |sum, id| -> Result<u64> {
                Ok(sum.saturating_add(self.store.get(id.as_str())?))
            })
    }

    /// Same classification as [`popularity_of`](Self::popularity_of), with
    /// the count of every contributing timezone.
    pub fn popularity_breakdown(&self, tz_or_prefix: &str) -> Result<PopularityBreakdown> {
        let mut breakdown = PopularityBreakdown::default();
        if let Some(id) = self.catalog.get(tz_or_prefix) {
            breakdown.push(id.clone(), self.store.get(id.as_str())?);
            return Ok(breakdown);
        }
        for id in self.catalog.region_members(tz_or_prefix) {
            breakdown.push(id.clone(), self.store.get(id.as_str())?);
        }
        Ok(breakdown)
    }

    fn count(&self, timezone: &str) -> Result<()> {
        let count = self.store.increment(timezone)?;
        debug!(timezone, count, "timezone queried");
        Ok(())
    }
}
