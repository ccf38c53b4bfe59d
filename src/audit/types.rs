//! Data structures for CloudTrail records and their summaries.
//!
//! Raw records are kept schema-less: CloudTrail events vary wildly by
//! service, and both filtering and projection have to walk shapes that are
//! not known ahead of time.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One audit event exactly as stored in the archive.
pub type RawRecord = serde_json::Value;

/// Top-level field of a CloudTrail bundle holding the event array.
pub const RECORDS_FIELD: &str = "Records";

/// Placeholder for summary fields the source record does not carry.
pub const UNKNOWN: &str = "Unknown";

/// Fixed-shape projection of one [`RawRecord`], used for listing and ordering.
///
/// # Fields
///
/// - `id`: the record's `eventID`
/// - `timestamp`: parsed `eventTime`
/// - `actor`: `userIdentity.userName`, else `userIdentity.accountId`
/// - `action`: the record's `eventName`
/// - `resource`: `requestParameters.bucketName`
/// - `record`: index of the originating record in the query's record set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub actor: String,
    pub action: String,
    pub resource: String,
    #[serde(skip)]
    pub record: usize,
}

impl SummaryRecord {
    /// Resolve the back-reference against the record set it was built from
    pub fn raw<'a>(&self, records: &'a [RawRecord]) -> Option<&'a RawRecord> {
        records.get(self.record)
    }
}
