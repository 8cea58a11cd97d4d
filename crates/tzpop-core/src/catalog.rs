// crates/tzpop-core/src/catalog.rs

//! # Timezone Catalog
//!
//! The authoritative, immutable set of timezone identifiers a process
//! accepts. Built once, then only read.

use crate::common::CatalogStats;
use crate::error::{Result, TzError};
use crate::model::TimezoneId;
use crate::traits::TimezoneListSource;
use std::collections::HashSet;
use tracing::info;

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// Entries in source order.
    ids: Vec<TimezoneId>,
    /// Exact-match index over `ids`.
    index: HashSet<TimezoneId>,
}

impl Catalog {
    /// Fetch the list once from `source` and build the catalog.
    ///
    /// Any failure of the source is reported as
    /// [`TzError::CatalogUnavailable`]; the caller is expected to abort
    /// startup on it.
    pub fn load<S: TimezoneListSource + ?Sized>(source: &S) -> Result<Self> {
        let raw = source.fetch_timezones().map_err(|e| match e {
            TzError::CatalogUnavailable(_) => e,
            other => TzError::CatalogUnavailable(other.to_string()),
        })?;
        let catalog = Self::from_ids(raw);
        info!(
            timezones = catalog.len(),
            regions = catalog.regions().len(),
            "timezone catalog loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog from an in-memory list.
    ///
    /// Duplicates are dropped; the first occurrence keeps its position.
    pub fn from_ids<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TimezoneId>,
    {
        let mut catalog = Self::default();
        for id in ids {
            let id = id.into();
            if catalog.index.insert(id.clone()) {
                catalog.ids.push(id);
            }
        }
        catalog
    }

    /// Exact, case-sensitive, whole-string membership.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains(id)
    }

    /// Look up the catalog's own copy of `id`.
    pub fn get(&self, id: &str) -> Option<&TimezoneId> {
        self.index.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimezoneId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Entries whose region segment equals `region`, in catalog order.
    ///
    /// Linear scan; the catalog holds a few hundred entries.
    pub fn region_members<'a>(&'a self, region: &'a str) -> impl Iterator<Item = &'a TimezoneId> {
        self.ids.iter().filter(move |id| id.in_region(region))
    }

    /// Distinct region segments, in first-seen order.
    pub fn regions(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.ids
            .iter()
            .map(TimezoneId::region)
            .filter(|region| seen.insert(*region))
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            timezones: self.len(),
            regions: self.regions().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_ids([
            "America/New_York",
            "America/Chicago",
            "America/Argentina/Salta",
            "Europe/London",
            "UTC",
        ])
    }

    struct FixedSource(Vec<&'static str>);

    impl TimezoneListSource for FixedSource {
        fn fetch_timezones(&self) -> Result<Vec<String>> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }
    }

    struct BrokenSource;

    impl TimezoneListSource for BrokenSource {
        fn fetch_timezones(&self) -> Result<Vec<String>> {
            Err(TzError::TimeLookupFailed("connection refused".into()))
        }
    }

    #[test]
    fn contains_is_exact_and_case_sensitive() {
        let catalog = sample();
        for id in catalog.iter() {
            assert!(catalog.contains(id.as_str()));
        }
        assert!(!catalog.contains("america/new_york"));
        assert!(!catalog.contains("America"));
        assert!(!catalog.contains("America/New"));
        assert!(!catalog.contains("America/New_York "));
        assert!(!catalog.contains(""));
    }

    #[test]
    fn duplicates_keep_first_position() {
        let catalog = Catalog::from_ids(["Europe/Paris", "Asia/Tokyo", "Europe/Paris"]);
        let ids: Vec<&str> = catalog.iter().map(TimezoneId::as_str).collect();
        assert_eq!(ids, ["Europe/Paris", "Asia/Tokyo"]);
    }

    #[test]
    fn region_members_are_separator_bounded() {
        let catalog = sample();
        let america: Vec<&str> = catalog
            .region_members("America")
            .map(TimezoneId::as_str)
            .collect();
        assert_eq!(
            america,
            ["America/New_York", "America/Chicago", "America/Argentina/Salta"]
        );
        assert_eq!(catalog.region_members("Americ").count(), 0);
        assert_eq!(catalog.region_members("America/Argentina").count(), 0);
        assert_eq!(catalog.region_members("UTC").count(), 0);
        assert_eq!(catalog.region_members("").count(), 0);
    }

    #[test]
    fn regions_and_stats() {
        let catalog = sample();
        assert_eq!(catalog.regions(), ["America", "Europe", "UTC"]);
        assert_eq!(
            catalog.stats(),
            CatalogStats {
                timezones: 5,
                regions: 3
            }
        );
    }

    #[test]
    fn load_uses_source_once() {
        let catalog = Catalog::load(&FixedSource(vec!["Asia/Tokyo", "Asia/Seoul"])).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains("Asia/Seoul"));
    }

    #[test]
    fn load_failure_is_catalog_unavailable() {
        let err = Catalog::load(&BrokenSource).unwrap_err();
        assert!(matches!(err, TzError::CatalogUnavailable(_)));
    }

    #[test]
    fn empty_source_yields_empty_catalog() {
        let catalog = Catalog::load(&FixedSource(vec![])).unwrap();
        assert!(catalog.is_empty());
        assert!(!catalog.contains("Europe/London"));
    }
}
