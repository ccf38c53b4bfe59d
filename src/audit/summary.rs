//! Projection of raw CloudTrail events into summaries, and their ordering.
//!
//! A record with a missing or unparsable `eventTime` fails the whole
//! projection. Every other missing field falls back to [`UNKNOWN`].

use crate::audit::criteria::resolve;
use crate::audit::types::{RawRecord, SummaryRecord, UNKNOWN};
use crate::error::{InspectError, Result};
use crate::utils::time::parse_timestamp;
use serde_json::Value;

const EVENT_ID: &str = "eventID";
const EVENT_TIME: &str = "eventTime";
const EVENT_NAME: &str = "eventName";
const USER_NAME: &str = "userIdentity.userName";
const ACCOUNT_ID: &str = "userIdentity.accountId";
const BUCKET_NAME: &str = "requestParameters.bucketName";

/// Project `record`, remembering `index` as its position in the record set.
///
/// # Errors
///
/// [`InspectError::InvalidTimestamp`] if `eventTime` is missing, not a
/// string, or not RFC 3339.
pub fn project(record: &RawRecord, index: usize) -> Result<SummaryRecord> {
    let id = text(record, EVENT_ID).unwrap_or_else(|| UNKNOWN.to_string());

    let raw_time = resolve(record, EVENT_TIME);
    let timestamp = raw_time
        .and_then(Value::as_str)
        .and_then(|ts| parse_timestamp(ts).ok())
        .ok_or_else(|| InspectError::InvalidTimestamp {
            event_id: id.clone(),
            value: raw_time.map_or_else(|| "missing".to_string(), Value::to_string),
        })?;

    let actor = resolve(record, USER_NAME)
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .or_else(|| text(record, ACCOUNT_ID))
        .unwrap_or_else(|| UNKNOWN.to_string());

    Ok(SummaryRecord {
        id,
        timestamp,
        actor,
        action: text(record, EVENT_NAME).unwrap_or_else(|| UNKNOWN.to_string()),
        resource: text(record, BUCKET_NAME).unwrap_or_else(|| UNKNOWN.to_string()),
        record: index,
    })
}

/// Stable sort by timestamp; equal timestamps keep their input order
pub fn order(summaries: &mut [SummaryRecord]) {
    summaries.sort_by_key(|s| s.timestamp);
}

/// Project every record (by position) and return them in chronological order
pub fn summarize(records: &[RawRecord]) -> Result<Vec<SummaryRecord>> {
    let mut summaries = records
        .iter()
        .enumerate()
        .map(|(index, record)| project(record, index))
        .collect::<Result<Vec<_>>>()?;
    order(&mut summaries);
    Ok(summaries)
}

/// Strings as-is, numbers and booleans rendered; null and containers are absent
fn text(record: &RawRecord, path: &str) -> Option<String> {
    match resolve(record, path)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
