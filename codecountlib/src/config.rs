//! Scan configuration: recognized extensions, skipped directories,
//! classification mode.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::classifier::ClassifyMode;

/// Default recognized file extensions.
pub const DEFAULT_EXTENSIONS: &[&str] = &["c", "cpp", "h", "make"];

/// Default directory names that are never descended into.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[".svn", "files", "man", "conf", "external", "scripts"];

/// Immutable configuration for one scan.
///
/// Extensions are matched case-insensitively against the text after the
/// final `.` of a file name; a file name with no dot matches as a whole
/// (so a file literally named `make` matches the `make` extension).
/// Directory names in the skip set are compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    extensions: BTreeSet<String>,
    skip_dirs: BTreeSet<String>,
    mode: ClassifyMode,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanConfig {
    /// Create a config with the default extension and skip sets.
    pub fn new() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|d| d.to_string()).collect(),
            mode: ClassifyMode::default(),
        }
    }

    /// Replace the recognized extension set. Extensions are lower-cased
    /// at construction so matching stays case-insensitive.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Replace the set of directory names to skip.
    pub fn skip_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.skip_dirs = dirs.into_iter().map(|d| d.as_ref().to_string()).collect();
        self
    }

    /// Set the classification mode.
    pub fn mode(mut self, mode: ClassifyMode) -> Self {
        self.mode = mode;
        self
    }

    /// The configured classification mode.
    pub fn classify_mode(&self) -> ClassifyMode {
        self.mode
    }

    /// Check whether a file name's extension is in the recognized set.
    pub fn matches_extension(&self, file_name: &str) -> bool {
        self.extensions.contains(&file_extension(file_name))
    }

    /// Check whether a directory name is in the skip set.
    pub fn is_skipped_dir(&self, dir_name: &str) -> bool {
        self.skip_dirs.contains(dir_name)
    }
}

/// Extract the extension of a file name: the lower-cased text after the
/// final `.`, or the whole lower-cased name when there is no dot.
fn file_extension(file_name: &str) -> String {
    let name = file_name.to_lowercase();
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_string(),
        None => name,
    }
}
