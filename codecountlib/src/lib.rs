//! # codecountlib
//!
//! A heuristic source line counter that walks a project tree and
//! tallies comment lines, blank lines, bracket-only lines, comment
//! blocks, class-looking lines and function-looking lines.
//!
//! ## Overview
//!
//! The counters are deliberately approximate: classification is a
//! single forward pass of substring checks per line, with one piece of
//! state (whether a block comment is open). There is no lexing and no
//! language awareness. The walk is single-threaded depth-first
//! recursion; directories in the skip set are never descended into,
//! and files are picked by case-insensitive extension.
//!
//! Failures never abort a scan, the root path included. Unreadable
//! directories and files are recorded as warnings on the statistics
//! record and the walk carries on; an unopenable root just produces an
//! all-zero record with one warning.
//!
//! ## Example
//!
//! ```rust
//! use codecountlib::{render, scan, ScanConfig};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(
//!     dir.path().join("main.c"),
//!     "// entry point\nint main(void)\n{\nreturn 0;\n}\n",
//! )
//! .unwrap();
//!
//! let stats = scan(dir.path(), &ScanConfig::new());
//! assert_eq!(stats.total_lines, 5);
//! assert_eq!(stats.counters.commented_lines, 1);
//! assert_eq!(stats.counters.bracket_lines, 2);
//! assert_eq!(stats.adjusted_lines(), 2);
//!
//! println!("{}", render(&stats));
//! ```
//!
//! ## Quirks
//!
//! The default [`ClassifyMode::Legacy`] reproduces the historical
//! heuristic exactly, including two documented quirks: the per-line
//! conditions are independent (one line can be double-counted), and a
//! block comment opened and closed on the same line still leaves the
//! classifier inside the block. [`ClassifyMode::Corrected`] cleans both
//! up as an explicit opt-in; the default never changes.

pub mod classifier;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod stats;
pub mod walker;

pub use classifier::{classify_lines, Classifier, ClassifyMode};
pub use config::{ScanConfig, DEFAULT_EXTENSIONS, DEFAULT_SKIP_DIRS};
pub use error::CodecountError;
pub use report::render;
pub use scanner::{scan, scan_file};
pub use stats::{Counters, ScanStats, ScanWarning};

/// Result type for codecountlib operations
pub type Result<T> = std::result::Result<T, CodecountError>;
