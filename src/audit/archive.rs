//! Archive discovery and parallel loading.
//!
//! Every `*.gz` bundle under the base path is read, decompressed and
//! parsed on a bounded rayon pool. Each worker returns the records of one
//! file; an indexed `collect` keeps discovery order so the combined record
//! set is deterministic regardless of which worker finishes first.
//!
//! Loading is fail-fast: the first unreadable, corrupt or malformed archive
//! aborts the whole load and no partial record set is returned.

use crate::audit::types::{RawRecord, RECORDS_FIELD};
use crate::error::{InspectError, Result};
use crate::utils::reader::read_archive;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Concurrency limit used when neither `--jobs` nor the environment sets one.
pub const DEFAULT_JOBS: usize = 8;

/// Archive glob, relative to the base path
const ARCHIVE_PATTERN: &str = "**/*.gz";

/// Enumerate the archives to load from `path`.
///
/// A regular file is returned as the single archive. A directory is searched
/// recursively for `*.gz` files, in glob order.
///
/// # Errors
///
/// [`InspectError::PathNotFound`] if `path` does not exist.
pub fn discover(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(InspectError::PathNotFound(path.to_path_buf()));
    }

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let base = glob::Pattern::escape(&path.to_string_lossy());
    let pattern = format!("{}/{}", base.trim_end_matches('/'), ARCHIVE_PATTERN);

    let mut files = Vec::new();
    for entry in glob::glob(&pattern)? {
        let entry = entry?;
        if entry.is_file() {
            files.push(entry);
        }
    }

    Ok(files)
}

/// Decompress and parse one archive, returning its `Records` array.
pub fn load_archive(path: &Path) -> Result<Vec<RawRecord>> {
    let bytes = read_archive(path)?;

    let mut bundle: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|source| InspectError::ArchiveParse {
            path: path.to_path_buf(),
            source,
        })?;

    match bundle.get_mut(RECORDS_FIELD).map(serde_json::Value::take) {
        Some(serde_json::Value::Array(records)) => Ok(records),
        _ => Err(InspectError::MissingRecords(path.to_path_buf())),
    }
}

/// Load every archive on a pool of at most `jobs` threads.
///
/// Records come back in file order, then in-file order. `on_file_done` is
/// called from the worker threads once per archive that loaded successfully.
///
/// # Errors
///
/// The first archive error encountered; remaining files are not scheduled.
pub fn load_archives<F>(files: &[PathBuf], jobs: usize, on_file_done: F) -> Result<Vec<RawRecord>>
where
    F: Fn(&Path) + Sync,
{
    if files.is_empty() {
        return Ok(Vec::new());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.max(1))
        .thread_name(|i| format!("archive-{i}"))
        .build()?;

    let per_file: Vec<Vec<RawRecord>> = pool.install(|| {
        files
            .par_iter()
            .map(|file| {
                let records = load_archive(file)?;
                on_file_done(file);
                Ok(records)
            })
            .collect::<Result<_>>()
    })?;

    let total = per_file.iter().map(Vec::len).sum();
    let mut records = Vec::with_capacity(total);
    for chunk in per_file {
        records.extend(chunk);
    }

    Ok(records)
}
