//! Core data structures for scan statistics

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

/// The six general counters accumulated across a scan.
///
/// All counters are monotonically increasing for the lifetime of a run.
/// The per-line conditions that feed them are not mutually exclusive, so
/// a single line can increment more than one counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    /// Lines that are comments (line comments plus block-comment lines)
    pub commented_lines: u64,
    /// Lines that are whitespace only
    pub blank_lines: u64,
    /// Lines whose trimmed content is exactly `{` or `}`
    pub bracket_lines: u64,
    /// Number of block comments opened
    pub comment_blocks: u64,
    /// Lines that look like a class declaration
    pub classes: u64,
    /// Lines that look like they contain a function
    pub functions: u64,
}

impl Counters {
    /// Create a new Counters with all zeros
    pub fn new() -> Self {
        Self::default()
    }
}

impl Add for Counters {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            commented_lines: self.commented_lines + other.commented_lines,
            blank_lines: self.blank_lines + other.blank_lines,
            bracket_lines: self.bracket_lines + other.bracket_lines,
            comment_blocks: self.comment_blocks + other.comment_blocks,
            classes: self.classes + other.classes,
            functions: self.functions + other.functions,
        }
    }
}

impl AddAssign for Counters {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// A non-fatal failure encountered during a scan.
///
/// Warnings accumulate on [`ScanStats`]; they never abort the walk and
/// never change the process exit status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanWarning {
    /// A directory could not be opened or fully listed; whatever could
    /// not be read contributed zero lines.
    DirectoryUnreadable { path: PathBuf, message: String },
    /// A file matched by extension could not be read; it was excluded.
    FileUnreadable { path: PathBuf, message: String },
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanWarning::DirectoryUnreadable { path, message } => {
                write!(f, "could not read directory '{}': {}", path.display(), message)
            }
            ScanWarning::FileUnreadable { path, message } => {
                write!(f, "could not read file '{}': {}", path.display(), message)
            }
        }
    }
}

/// The single statistics record for one scan.
///
/// Created once, mutated in place throughout the recursive walk, read
/// once at the end to render the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// General heuristic counters
    pub counters: Counters,
    /// Every line read across all included files
    pub total_lines: u64,
    /// Files that passed the extension filter, in walk order
    pub included_files: Vec<PathBuf>,
    /// Skipped directories and extension-rejected or unreadable files,
    /// in walk order
    pub excluded_files: Vec<PathBuf>,
    /// Non-fatal failures encountered along the way
    pub warnings: Vec<ScanWarning>,
}

impl ScanStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Approximate "real code" line count: total lines minus commented,
    /// blank and bracket-only lines.
    ///
    /// Because the per-line conditions can double-count a line, this
    /// can legitimately go negative. It is never clamped.
    pub fn adjusted_lines(&self) -> i64 {
        self.total_lines as i64
            - self.counters.commented_lines as i64
            - self.counters.blank_lines as i64
            - self.counters.bracket_lines as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_default() {
        let counters = Counters::new();
        assert_eq!(counters.commented_lines, 0);
        assert_eq!(counters.blank_lines, 0);
        assert_eq!(counters.bracket_lines, 0);
        assert_eq!(counters.comment_blocks, 0);
        assert_eq!(counters.classes, 0);
        assert_eq!(counters.functions, 0);
    }

    #[test]
    fn test_counters_add() {
        let a = Counters {
            commented_lines: 10,
            blank_lines: 5,
            bracket_lines: 3,
            comment_blocks: 2,
            classes: 1,
            functions: 4,
        };
        let b = Counters {
            commented_lines: 1,
            blank_lines: 2,
            bracket_lines: 3,
            comment_blocks: 4,
            classes: 5,
            functions: 6,
        };
        let sum = a + b;
        assert_eq!(sum.commented_lines, 11);
        assert_eq!(sum.blank_lines, 7);
        assert_eq!(sum.bracket_lines, 6);
        assert_eq!(sum.comment_blocks, 6);
        assert_eq!(sum.classes, 6);
        assert_eq!(sum.functions, 10);
    }

    #[test]
    fn test_adjusted_lines() {
        let stats = ScanStats {
            counters: Counters {
                commented_lines: 10,
                blank_lines: 5,
                bracket_lines: 5,
                ..Counters::default()
            },
            total_lines: 100,
            ..ScanStats::default()
        };
        assert_eq!(stats.adjusted_lines(), 80);
    }

    #[test]
    fn test_adjusted_lines_can_go_negative() {
        // Double-counted lines can push the sum of the subtracted
        // counters past the total; the result must not be clamped.
        let stats = ScanStats {
            counters: Counters {
                commented_lines: 8,
                blank_lines: 3,
                ..Counters::default()
            },
            total_lines: 10,
            ..ScanStats::default()
        };
        assert_eq!(stats.adjusted_lines(), -1);
    }

    #[test]
    fn test_warning_display() {
        let warning = ScanWarning::DirectoryUnreadable {
            path: PathBuf::from("/some/dir"),
            message: "permission denied".to_string(),
        };
        let text = warning.to_string();
        assert!(text.contains("/some/dir"));
        assert!(text.contains("permission denied"));
    }

    #[test]
    fn test_stats_serialize_round_trip() {
        let stats = ScanStats {
            counters: Counters {
                functions: 7,
                ..Counters::default()
            },
            total_lines: 42,
            included_files: vec![PathBuf::from("/a/b.c")],
            ..ScanStats::default()
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: ScanStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
