//! CloudTrail archive ingestion and querying.
//!
//! - [`archive`] - Archive discovery and parallel loading
//! - [`criteria`] - Nested key/value filters
//! - [`summary`] - Projection into summaries and chronological ordering
//! - [`query`] - The end-to-end pipeline
//! - [`lookup`] - Summary id to raw record resolution
//! - [`types`] - Record and summary types

pub mod archive;
pub mod criteria;
pub mod lookup;
pub mod query;
pub mod summary;
pub mod types;
