// crates/tzpop-core/src/error.rs
use thiserror::Error;

/// Every failure the core can report.
///
/// `UnknownTimezone`, `MalformedTimeResponse` and `UnparseableTimestamp` are
/// caller-facing results (see [`TzError::is_reported`]); the rest mean a
/// collaborator or the configuration is broken.
#[derive(Debug, Error)]
pub enum TzError {
    /// The timezone list could not be fetched or parsed. Fatal at startup.
    #[error("timezone catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// The counter backend could not be reached or returned garbage.
    #[error("popularity store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),

    /// The time service answered, but without a usable `datetime` field.
    #[error("malformed time response: {0}")]
    MalformedTimeResponse(String),

    /// The `datetime` field is not RFC 3339. Carries the raw value.
    #[error("could not parse time from provided string: {0}")]
    UnparseableTimestamp(String),

    /// Transport-level failure talking to the time service.
    #[error("time lookup failed: {0}")]
    TimeLookupFailed(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl TzError {
    /// `true` for validation and response-shape errors that a front end
    /// should show to its user as an answer rather than treat as a failure.
    pub fn is_reported(&self) -> bool {
        matches!(
            self,
            TzError::UnknownTimezone(_)
                | TzError::MalformedTimeResponse(_)
                | TzError::UnparseableTimestamp(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, TzError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reported_errors_are_classified() {
        assert!(TzError::UnknownTimezone("Mars/Crater".into()).is_reported());
        assert!(TzError::UnparseableTimestamp("not-a-date".into()).is_reported());
        assert!(TzError::MalformedTimeResponse("{}".into()).is_reported());
        assert!(!TzError::StoreUnavailable("refused".into()).is_reported());
        assert!(!TzError::CatalogUnavailable("offline".into()).is_reported());
        assert!(!TzError::TimeLookupFailed("timeout".into()).is_reported());
    }

    #[test]
    fn unparseable_timestamp_message_carries_raw_value() {
        let e = TzError::UnparseableTimestamp("not-a-date".into());
        assert_eq!(
            e.to_string(),
            "could not parse time from provided string: not-a-date"
        );
    }
}
