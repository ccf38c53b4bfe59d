//! # CloudTrail Inspector
//!
//! Interactive command-line inspector for compressed AWS CloudTrail audit log
//! archives.
//!
//! ## Overview
//!
//! CloudTrail delivers events as gzip-compressed JSON bundles
//! (`{"Records": [...]}`), thousands of them per day and region. This crate
//! loads every bundle under a directory in parallel, filters the events with
//! flat or nested key/value criteria, lists the matches as a time-sorted
//! table and lets the operator drill into the full JSON of any single event.
//!
//! ## Architecture
//!
//! - [`audit`] - Archive loading, criteria matching, projection and ordering
//! - [`commands`] - The interactive `inspect` command
//! - [`error`] - Error types of the query pipeline
//! - [`utils`] - Shared utilities (decompression, prompts, tables, progress)
//!
//! ## Library Usage
//!
//! ```no_run
//! use cloudtrail_inspector::audit::query::{run, CriteriaSource};
//! use serde_json::json;
//! use std::path::Path;
//!
//! let criteria = CriteriaSource::Json(json!({"userIdentity": {"userName": "alice"}}));
//! let result = run(Path::new("logs/"), criteria, 8, |_| {}).unwrap();
//!
//! for summary in &result.summaries {
//!     println!("{} {} {}", summary.timestamp, summary.action, summary.resource);
//! }
//! ```
//!
//! ## Example Usage
//!
//! ```bash
//! # Ask for everything interactively
//! cloudtrail-inspector inspect
//!
//! # Only events by alice against one bucket
//! cloudtrail-inspector inspect logs/ \
//!     --filter userIdentity.userName=alice \
//!     --filter requestParameters.bucketName=logs-a
//!
//! # Show one event straight away
//! cloudtrail-inspector inspect logs/ --id E1 --details E1 --no-prompt
//! ```

pub mod audit;
pub mod commands;
pub mod error;
pub mod utils;
