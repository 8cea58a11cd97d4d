// crates/tzpop-core/src/model.rs
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Separator between the segments of an IANA identifier.
pub const SEGMENT_SEPARATOR: char = '/';

/// A fully-qualified IANA timezone identifier, e.g. `America/New_York`.
///
/// The type carries no validity guarantee by itself: an id is only valid
/// when the [`Catalog`](crate::Catalog) it is checked against contains it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimezoneId(String);

impl TimezoneId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The leading `Region` segment (`America` for `America/New_York`).
    ///
    /// Identifiers without a separator (`UTC`, `EST`) are their own region.
    pub fn region(&self) -> &str {
        self.0
            .split_once(SEGMENT_SEPARATOR)
            .map_or(self.0.as_str(), |(region, _)| region)
    }

    /// `true` if `region` is exactly this id's leading `Region/` segment.
    ///
    /// Only single-segment regions match: `Americ` and `America/Argentina`
    /// both miss `America/Argentina/Salta`. Ids without a separator belong
    /// to no region.
    pub fn in_region(&self, region: &str) -> bool {
        !region.is_empty()
            && self
                .0
                .split_once(SEGMENT_SEPARATOR)
                .is_some_and(|(head, _)| head == region)
    }
}

impl fmt::Display for TimezoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TimezoneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashSet<TimezoneId>` be queried with a plain `&str`.
impl Borrow<str> for TimezoneId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TimezoneId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for TimezoneId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
