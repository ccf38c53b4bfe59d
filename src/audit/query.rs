//! The ingestion-and-query pipeline.
//!
//! [`run`] discovers archives, loads them in parallel, filters the records
//! with a [`CriteriaSet`] and projects the survivors into chronologically
//! ordered summaries. The first failing stage ends the run; there is no
//! partial result.

use crate::audit::archive::{discover, load_archives};
use crate::audit::criteria::CriteriaSet;
use crate::audit::lookup;
use crate::audit::summary::summarize;
use crate::audit::types::{RawRecord, SummaryRecord};
use crate::error::Result;
use std::path::Path;

/// Where the filter for a run comes from
#[derive(Debug, Clone)]
pub enum CriteriaSource {
    /// No filtering
    All,
    /// Select one event by `eventID`
    EventId(String),
    /// A (possibly nested) JSON object of expected values
    Json(serde_json::Value),
    /// A set assembled by the caller, e.g. from interactive answers
    Set(CriteriaSet),
}

impl CriteriaSource {
    pub fn into_criteria(self) -> Result<CriteriaSet> {
        match self {
            Self::All => Ok(CriteriaSet::new()),
            Self::EventId(id) => Ok(CriteriaSet::event_id(&id)),
            Self::Json(value) => CriteriaSet::from_json(&value),
            Self::Set(set) => Ok(set),
        }
    }
}

/// Outcome of a pipeline run.
///
/// Owns the records that passed the filter; each summary refers back into
/// `records` by index.
#[derive(Debug, Default)]
pub struct QueryResult {
    /// Archives read
    pub files: usize,
    /// Records loaded before filtering
    pub loaded: usize,
    pub records: Vec<RawRecord>,
    pub summaries: Vec<SummaryRecord>,
}

impl QueryResult {
    /// Detail lookup against this result's summaries
    pub fn find(&self, id: &str) -> Option<&RawRecord> {
        lookup::find(&self.summaries, &self.records, id)
    }
}

/// Run discovery, loading, filtering and projection over `path`.
///
/// `jobs` bounds the number of archives decoded concurrently and
/// `on_file_done` is ticked once per archive.
pub fn run<F>(path: &Path, source: CriteriaSource, jobs: usize, on_file_done: F) -> Result<QueryResult>
where
    F: Fn(&Path) + Sync,
{
    let files = discover(path)?;
    run_files(&files, source, jobs, on_file_done)
}

/// Same as [`run`] for an already discovered archive list
pub fn run_files<F>(
    files: &[std::path::PathBuf],
    source: CriteriaSource,
    jobs: usize,
    on_file_done: F,
) -> Result<QueryResult>
where
    F: Fn(&Path) + Sync,
{
    let criteria = source.into_criteria()?;
    let records = load_archives(files, jobs, on_file_done)?;
    let loaded = records.len();

    let records = criteria.filter(records);
    let summaries = summarize(&records)?;

    Ok(QueryResult {
        files: files.len(),
        loaded,
        records,
        summaries,
    })
}
