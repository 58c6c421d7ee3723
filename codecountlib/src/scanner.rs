//! High-level scan entry points.

use std::fs;
use std::path::Path;

use crate::classifier::{classify_lines, ClassifyMode};
use crate::config::ScanConfig;
use crate::error::CodecountError;
use crate::stats::ScanStats;
use crate::walker::walk;
use crate::Result;

/// Scan a directory tree and return the aggregated statistics.
///
/// Best-effort all the way down: a root that cannot be opened (missing,
/// unreadable, not a directory) is reported as a warning on the
/// returned stats with all counters zero, the same as any other
/// unreadable subtree. The root is canonicalized up front so the report
/// lists absolute paths.
///
/// # Example
///
/// ```rust,ignore
/// use codecountlib::{scan, ScanConfig};
///
/// let stats = scan("src/", &ScanConfig::new().extensions(["rs"]));
/// println!("{} lines", stats.total_lines);
/// ```
pub fn scan(root: impl AsRef<Path>, config: &ScanConfig) -> ScanStats {
    let root = root.as_ref();
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());

    let mut stats = ScanStats::new();
    walk(&root, config, &mut stats);

    stats
}

/// Classify a single file and return its statistics.
///
/// Unlike the per-file handling inside a tree walk, a read failure here
/// is a hard error; there are no sibling entries to fall back to.
pub fn scan_file(path: impl AsRef<Path>, mode: ClassifyMode) -> Result<ScanStats> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|e| CodecountError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let text = String::from_utf8_lossy(&bytes);

    let mut stats = ScanStats::new();
    stats.total_lines = classify_lines(text.lines(), mode, &mut stats.counters);
    stats.included_files.push(path.to_path_buf());

    Ok(stats)
}
