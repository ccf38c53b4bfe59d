//! Archive reader with automatic decompression support.
//!
//! Reads a CloudTrail bundle into memory in one go, decompressing it when
//! the file name says it is compressed.
//!
//! # Supported Formats
//!
//! - Gzip compressed files (.gz)
//! - Plain JSON files (anything else, when passed explicitly)
//!
//! # Examples
//!
//! ```no_run
//! use cloudtrail_inspector::utils::reader::read_archive;
//!
//! let bytes = read_archive("logs/123456789012_CloudTrail_eu-west-1_20230101T0000Z_abc.json.gz").unwrap();
//! let bundle: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
//! ```

use crate::error::{InspectError, Result};
use flate2::read::GzDecoder;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Reads an archive and returns its decompressed bytes.
///
/// Detects the format by extension:
/// - `.gz` → Gzip decompression
/// - Otherwise → bytes as stored
///
/// # Errors
///
/// [`InspectError::ArchiveRead`] when the file cannot be read and
/// [`InspectError::ArchiveDecompress`] when the gzip stream is corrupt.
pub fn read_archive(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let raw = fs::read(path).map_err(|source| InspectError::ArchiveRead {
        path: path.to_path_buf(),
        source,
    })?;

    if !is_gzip(path) {
        return Ok(raw);
    }

    let mut decoded = Vec::new();
    GzDecoder::new(raw.as_slice())
        .read_to_end(&mut decoded)
        .map_err(|source| InspectError::ArchiveDecompress {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(decoded)
}

fn is_gzip(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("gz")
}
