// crates/tzpop-core/src/common.rs
use crate::model::TimezoneId;
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a catalog.
///
/// Returned by [`Catalog::stats`](crate::Catalog::stats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub timezones: usize,
    pub regions: usize,
}

/// Per-timezone popularity counts behind a single popularity query.
///
/// For an exact timezone this holds one entry; for a region prefix it holds
/// every catalog entry under that region, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularityBreakdown {
    pub entries: Vec<(TimezoneId, u64)>,
    pub total: u64,
}

impl PopularityBreakdown {
    pub fn push(&mut self, id: TimezoneId, count: u64) {
        self.total = self.total.saturating_add(count);
        self.entries.push((id, count));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
