// crates/tzpop-core/src/lib.rs

pub mod catalog;
pub mod common;
pub mod config;
pub mod engine; // Validation, time queries, prefix aggregation
pub mod error;
pub mod loader; // Local catalog files + the World Time API client
pub mod model;
pub mod store;
pub mod text; // Timestamp parsing and display formatting
pub mod traits;

// Re-exports
pub use crate::error::{Result, TzError};
pub use catalog::Catalog;
pub use common::{CatalogStats, PopularityBreakdown};
pub use config::{CountPolicy, ServiceConfig};
pub use engine::QueryEngine;
pub use model::TimezoneId;
pub use store::{JsonFileStore, MemoryStore};
// Export the collaborator traits (Crucial for users!)
pub use traits::{PopularityStore, TimeLookup, TimezoneListSource};

#[cfg(feature = "http")]
pub use loader::remote::WorldTimeApi;
#[cfg(feature = "redis")]
pub use store::redis::RedisStore;
