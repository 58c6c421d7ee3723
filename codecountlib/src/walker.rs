//! Recursive directory walker.
//!
//! Depth-first, single-threaded, best-effort: unreadable directories
//! and files become warnings on the statistics record rather than
//! errors, so one bad entry never aborts the scan.

use std::fs;
use std::path::Path;

use crate::classifier::classify_lines;
use crate::config::ScanConfig;
use crate::stats::{ScanStats, ScanWarning};

/// Walk a directory tree, classifying every file whose extension is in
/// the configured set. Returns the number of lines read anywhere under
/// `dir` (included files only); the same count is also accumulated into
/// `stats.total_lines`.
///
/// Every entry ends up in exactly one of: recursed into (directory),
/// `included_files`, or `excluded_files`. Entries are visited in file
/// name order so report listings are deterministic; this affects
/// ordering only, never totals.
pub fn walk(dir: &Path, config: &ScanConfig, stats: &mut ScanStats) -> u64 {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            stats.warnings.push(ScanWarning::DirectoryUnreadable {
                path: dir.to_path_buf(),
                message: e.to_string(),
            });
            return 0;
        }
    };

    let mut entries = Vec::new();
    for entry in read_dir {
        match entry {
            Ok(entry) => entries.push(entry),
            // A dirent that errors mid-listing still counts as
            // encountered; surface it instead of dropping it.
            Err(e) => stats.warnings.push(ScanWarning::DirectoryUnreadable {
                path: dir.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }
    entries.sort_by_key(|entry| entry.file_name());

    let mut lines = 0u64;

    for entry in entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

        if is_dir {
            if config.is_skipped_dir(&name) {
                stats.excluded_files.push(path);
            } else {
                lines += walk(&path, config, stats);
            }
        } else if config.matches_extension(&name) {
            if let Some(file_lines) = count_file(&path, config, stats) {
                lines += file_lines;
            }
        } else {
            stats.excluded_files.push(path);
        }
    }

    lines
}

/// Read and classify one included file. On success the file lands in
/// `included_files` and its line count is added to `total_lines`; on a
/// read failure it lands in `excluded_files` with a warning.
fn count_file(path: &Path, config: &ScanConfig, stats: &mut ScanStats) -> Option<u64> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            stats.warnings.push(ScanWarning::FileUnreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
            stats.excluded_files.push(path.to_path_buf());
            return None;
        }
    };

    // Lossy decode: the counters are approximate by design, and a few
    // replacement characters must not exclude an otherwise valid file.
    let text = String::from_utf8_lossy(&bytes);
    let lines = classify_lines(text.lines(), config.classify_mode(), &mut stats.counters);

    stats.total_lines += lines;
    stats.included_files.push(path.to_path_buf());
    Some(lines)
}
