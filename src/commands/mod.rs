//! Command implementations.
//!
//! - [`inspect`] - Interactive inspection of CloudTrail archives: filter,
//!   list chronologically, and drill into single events

pub mod inspect;
