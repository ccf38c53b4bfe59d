//! Flat equality filters over nested records.
//!
//! Filter requests can be nested JSON objects (`{"userIdentity": {"type":
//! "Root"}}`) or already-flattened dot paths (`{"userIdentity.type":
//! "Root"}`). Both normalize to the same [`CriteriaSet`], a map from dot path
//! to expected value. Matching resolves each path against the record and
//! requires every expectation to hold.

use crate::audit::types::RawRecord;
use crate::error::{InspectError, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Path separator for nested keys
pub const PATH_SEPARATOR: char = '.';

/// Conjunction of `(path, expected value)` predicates.
///
/// The empty set matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriteriaSet {
    criteria: BTreeMap<String, Value>,
}

impl CriteriaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shortcut filter selecting a single event by `eventID`
    pub fn event_id(id: &str) -> Self {
        let mut set = Self::new();
        set.insert("eventID", Value::String(id.to_string()));
        set
    }

    /// Build a set from a (possibly nested) JSON object, flattening every leaf
    /// to its dot path.
    ///
    /// # Errors
    ///
    /// [`InspectError::InvalidCriteria`] if `value` is not an object.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(InspectError::InvalidCriteria(format!(
                "expected a JSON object, got {value}"
            )));
        };

        let mut set = Self::new();
        flatten_into(map, None, &mut set.criteria);
        Ok(set)
    }

    /// Add or replace the expectation for `path`.
    ///
    /// A nested object or array value is flattened below `path`.
    pub fn insert(&mut self, path: impl Into<String>, value: Value) {
        let path = path.into();
        match &value {
            Value::Object(map) if !map.is_empty() => {
                flatten_into(map, Some(&path), &mut self.criteria);
            }
            Value::Array(items) if !items.is_empty() => {
                flatten_array_into(items, &path, &mut self.criteria);
            }
            _ => {
                self.criteria.insert(path, value);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.criteria.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// True iff every criterion holds for `record`
    pub fn matches(&self, record: &RawRecord) -> bool {
        self.criteria
            .iter()
            .all(|(path, expected)| resolve(record, path).is_some_and(|v| values_equal(v, expected)))
    }

    /// Keep only the records that match, preserving their order
    pub fn filter(&self, records: Vec<RawRecord>) -> Vec<RawRecord> {
        if self.is_empty() {
            return records;
        }
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

/// `matches(record, criteria)` in free-function form
pub fn matches(record: &RawRecord, criteria: &CriteriaSet) -> bool {
    criteria.matches(record)
}

fn join(prefix: Option<&str>, key: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}{PATH_SEPARATOR}{key}"),
        None => key.to_string(),
    }
}

fn flatten_into(map: &Map<String, Value>, prefix: Option<&str>, out: &mut BTreeMap<String, Value>) {
    for (key, value) in map {
        let path = join(prefix, key);
        flatten_value(value, path, out);
    }
}

fn flatten_array_into(items: &[Value], prefix: &str, out: &mut BTreeMap<String, Value>) {
    for (index, value) in items.iter().enumerate() {
        let path = join(Some(prefix), &index.to_string());
        flatten_value(value, path, out);
    }
}

fn flatten_value(value: &Value, path: String, out: &mut BTreeMap<String, Value>) {
    match value {
        Value::Object(nested) if !nested.is_empty() => flatten_into(nested, Some(&path), out),
        Value::Array(items) if !items.is_empty() => flatten_array_into(items, &path, out),
        leaf => {
            out.insert(path, leaf.clone());
        }
    }
}

/// Walk `path` through `record`.
///
/// Returns `None` when any step is missing: an absent key, an out-of-range
/// or non-numeric index into an array, or a step into a scalar. `None` is
/// distinct from a present `null`.
pub fn resolve<'a>(record: &'a RawRecord, path: &str) -> Option<&'a Value> {
    path.split(PATH_SEPARATOR)
        .try_fold(record, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

/// Type-aware equality: numbers compare numerically, everything else must
/// match in both type and value.
pub fn values_equal(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
                a == b
            } else if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
                a == b
            } else {
                a.as_f64() == b.as_f64()
            }
        }
        _ => actual == expected,
    }
}
