//! tzpop-rs
//! ========
//!
//! Workspace umbrella crate. Re-exports [`tzpop_core`] so the demos and
//! benches in this repository can use a single dependency.

pub use tzpop_core::*;
