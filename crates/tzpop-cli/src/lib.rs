// crates/tzpop-cli/src/lib.rs

//! tzpop-cli
//! ==========
//!
//! Command-line interface for the `tzpop-core` timezone popularity tracker.
//!
//! This crate primarily provides a binary (`tzpop`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! tzpop --help
//! tzpop time America/New_York
//! tzpop --store counts.json popularity America --breakdown
//! tzpop list Europe
//! ```
//!
//! For programmatic access, use the [`tzpop-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
