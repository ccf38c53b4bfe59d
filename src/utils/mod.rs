//! Utility functions and helpers.
//!
//! This module provides the plumbing around the query pipeline:
//!
//! - [`reader`] - Archive reader with automatic gzip decompression
//! - [`time`] - Timestamp parsing and formatting helpers
//! - [`progress`] - Progress tracking and display utilities
//! - [`format`] - Number and table formatting
//! - [`prompt`] - Interactive question/answer prompts
//!
//! # Examples
//!
//! ## Parsing timestamps
//!
//! ```
//! use cloudtrail_inspector::utils::time::{format_timestamp, parse_timestamp};
//!
//! let timestamp = parse_timestamp("2023-01-02T10:30:00Z").unwrap();
//! assert_eq!(format_timestamp(&timestamp), "2023-01-02 10:30");
//! ```

pub mod format;
pub mod progress;
pub mod prompt;
pub mod reader;
pub mod time;
