//! Error taxonomy for the ingestion-and-query pipeline.
//!
//! Every variant here is fatal for a run. An unresolved detail selection is
//! not an error at all; [`crate::audit::lookup::find`] simply returns `None`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while discovering, loading, filtering or projecting records.
#[derive(Debug, Error)]
pub enum InspectError {
    /// The supplied log path does not exist.
    #[error("Your path is incorrect ({})", .0.display())]
    PathNotFound(PathBuf),

    #[error("Invalid archive pattern")]
    Pattern(#[from] glob::PatternError),

    /// A directory entry could not be read while walking the archive glob.
    #[error("Failed to enumerate archives")]
    Discovery(#[from] glob::GlobError),

    #[error("Failed to read archive {}", path.display())]
    ArchiveRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decompress archive {}", path.display())]
    ArchiveDecompress {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in archive {}", path.display())]
    ArchiveParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The bundle parsed but has no `Records` array.
    #[error("Archive {} has no `Records` array", .0.display())]
    MissingRecords(PathBuf),

    /// `eventTime` is missing or not an RFC 3339 timestamp.
    #[error("Event {event_id} has an invalid eventTime ({value})")]
    InvalidTimestamp { event_id: String, value: String },

    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    #[error("Failed to start archive worker pool")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, InspectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_not_found_message() {
        let err = InspectError::PathNotFound(PathBuf::from("/nope/logs"));
        assert_eq!(err.to_string(), "Your path is incorrect (/nope/logs)");
    }

    #[test]
    fn test_archive_errors_keep_source() {
        let err = InspectError::ArchiveRead {
            path: PathBuf::from("a.json.gz"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let chained = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chained, "Failed to read archive a.json.gz: gone");
    }
}
