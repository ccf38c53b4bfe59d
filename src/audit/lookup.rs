//! Resolve a summary id back to its full raw record.

use crate::audit::types::{RawRecord, SummaryRecord};

/// Find the raw record behind the summary whose id is `id`.
///
/// Returns `None` when no summary matches, and also when several do: ids are
/// unique by invariant, so a duplicate is not a valid selection.
pub fn find<'a>(summaries: &[SummaryRecord], records: &'a [RawRecord], id: &str) -> Option<&'a RawRecord> {
    let mut hits = summaries.iter().filter(|s| s.id == id);
    let hit = hits.next()?;
    if hits.next().is_some() {
        return None;
    }
    hit.raw(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::summary::{project, summarize};
    use serde_json::json;

    fn records() -> Vec<RawRecord> {
        vec![
            json!({"eventID": "E1", "eventTime": "2023-01-02T00:00:00Z", "requestParameters": {"bucketName": "logs-a"}}),
            json!({"eventID": "E2", "eventTime": "2023-01-01T00:00:00Z", "requestParameters": {"bucketName": "logs-b"}}),
        ]
    }

    #[test]
    fn test_find_round_trip() {
        let records = records();
        let summaries = summarize(&records).unwrap();

        for summary in &summaries {
            let raw = find(&summaries, &records, &summary.id).unwrap();
            assert_eq!(&project(raw, summary.record).unwrap(), summary);
        }
    }

    #[test]
    fn test_find_unknown_id() {
        let records = records();
        let summaries = summarize(&records).unwrap();
        assert!(find(&summaries, &records, "E9").is_none());
        assert!(find(&summaries, &records, "").is_none());
    }

    #[test]
    fn test_find_duplicate_id_is_not_found() {
        let records = vec![
            json!({"eventID": "dup", "eventTime": "2023-01-01T00:00:00Z"}),
            json!({"eventID": "dup", "eventTime": "2023-01-02T00:00:00Z"}),
        ];
        let summaries = summarize(&records).unwrap();
        assert!(find(&summaries, &records, "dup").is_none());
    }
}
