//! Error types for codecountlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors from single-file classification.
///
/// Tree scans are best-effort and never fail: their per-entry failures
/// (an unreadable directory or file, a root that cannot be opened) are
/// recorded as [`ScanWarning`](crate::stats::ScanWarning)s on the
/// statistics record so the walk can continue. Only
/// [`scan_file`](crate::scanner::scan_file), which has no sibling
/// traversal to fall back to, reports a hard error.
#[derive(Error, Debug)]
pub enum CodecountError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}
