//! Per-line heuristic classifier.
//!
//! One forward pass over a file's lines with a single piece of state:
//! whether the classifier is currently inside a block comment. The
//! per-line conditions are substring checks only; there is no lexing,
//! and a single line can increment several counters at once.

use serde::{Deserialize, Serialize};

use crate::stats::Counters;

const LINE_COMMENT: &str = "//";
const BLOCK_OPEN: &str = "/*";
const BLOCK_CLOSE: &str = "*/";

/// How lines are classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassifyMode {
    /// The historical heuristic, quirks included: the conditions are
    /// evaluated independently so one line can be counted both as a
    /// comment and as a block-comment start, and a block-comment open
    /// marker leaves the classifier inside the block even when the
    /// close marker sits on the same line (only a subsequent line can
    /// close it).
    #[default]
    Legacy,
    /// Opt-in cleanup of the two legacy quirks: a close marker after
    /// the open marker on the same line closes the block immediately,
    /// and `commented_lines` increments at most once per line.
    Corrected,
}

/// Classifies the lines of one file, mutating a shared [`Counters`].
///
/// State does not persist across files; create a fresh classifier (or
/// call [`classify_lines`]) per file.
#[derive(Debug, Clone)]
pub struct Classifier {
    mode: ClassifyMode,
    in_block_comment: bool,
}

impl Classifier {
    /// Create a classifier with its block-comment flag cleared.
    pub fn new(mode: ClassifyMode) -> Self {
        Self {
            mode,
            in_block_comment: false,
        }
    }

    /// Whether the classifier is currently inside a block comment.
    pub fn in_block_comment(&self) -> bool {
        self.in_block_comment
    }

    /// Classify a single line, incrementing the matching counters.
    ///
    /// Inside a block comment the line counts as commented and only the
    /// close marker is looked for. Outside, the conditions below are
    /// checked in order and are not mutually exclusive:
    ///
    /// 1. the line contains `function` anywhere (case-sensitive)
    /// 2. the trimmed line starts with `//`
    /// 3. the trimmed line starts with `class`
    /// 4. the line contains `/*` anywhere (opens a block comment)
    /// 5. the trimmed line is empty
    /// 6. the trimmed line is exactly `{` or `}`
    pub fn classify_line(&mut self, line: &str, counters: &mut Counters) {
        if self.in_block_comment {
            counters.commented_lines += 1;
            if line.contains(BLOCK_CLOSE) {
                self.in_block_comment = false;
            }
            return;
        }

        match self.mode {
            ClassifyMode::Legacy => self.classify_legacy(line, counters),
            ClassifyMode::Corrected => self.classify_corrected(line, counters),
        }
    }

    fn classify_legacy(&mut self, line: &str, counters: &mut Counters) {
        let trimmed = line.trim();

        if line.contains("function") {
            counters.functions += 1;
        }

        if trimmed.starts_with(LINE_COMMENT) {
            counters.commented_lines += 1;
        }

        if trimmed.starts_with("class") {
            counters.classes += 1;
        }

        if line.contains(BLOCK_OPEN) {
            // The close marker is only looked for on subsequent lines,
            // so `/* x */` on one line still leaves the block open.
            self.in_block_comment = true;
            counters.commented_lines += 1;
            counters.comment_blocks += 1;
        }

        if trimmed.is_empty() {
            counters.blank_lines += 1;
        }

        if trimmed == "{" || trimmed == "}" {
            counters.bracket_lines += 1;
        }
    }

    fn classify_corrected(&mut self, line: &str, counters: &mut Counters) {
        let trimmed = line.trim();
        let mut counted_comment = false;

        if line.contains("function") {
            counters.functions += 1;
        }

        if trimmed.starts_with(LINE_COMMENT) {
            counters.commented_lines += 1;
            counted_comment = true;
        }

        if trimmed.starts_with("class") {
            counters.classes += 1;
        }

        if let Some(open) = line.find(BLOCK_OPEN) {
            counters.comment_blocks += 1;
            if !counted_comment {
                counters.commented_lines += 1;
            }
            // A close marker after the open marker keeps the block from
            // spilling into the next line.
            if !line[open + BLOCK_OPEN.len()..].contains(BLOCK_CLOSE) {
                self.in_block_comment = true;
            }
        }

        if trimmed.is_empty() {
            counters.blank_lines += 1;
        }

        if trimmed == "{" || trimmed == "}" {
            counters.bracket_lines += 1;
        }
    }
}

/// Classify all lines of one file with a fresh classifier, returning
/// the number of lines consumed.
pub fn classify_lines<'a, I>(lines: I, mode: ClassifyMode, counters: &mut Counters) -> u64
where
    I: IntoIterator<Item = &'a str>,
{
    let mut classifier = Classifier::new(mode);
    let mut count = 0u64;
    for line in lines {
        classifier.classify_line(line, counters);
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(content: &str, mode: ClassifyMode) -> Counters {
        let mut counters = Counters::new();
        classify_lines(content.lines(), mode, &mut counters);
        counters
    }

    #[test]
    fn test_blank_comment_and_bracket_lines() {
        let content = "\n  \n// hi\nint f(){\n}\n";
        let counters = classify(content, ClassifyMode::Legacy);
        assert_eq!(counters.blank_lines, 2);
        assert_eq!(counters.commented_lines, 1);
        // "int f(){" contains no literal "function" and is not a lone brace
        assert_eq!(counters.functions, 0);
        assert_eq!(counters.bracket_lines, 1);
    }

    #[test]
    fn test_function_substring_anywhere() {
        let content = "void my_function(int x);\nfunctional style\nint f(void);\n";
        let counters = classify(content, ClassifyMode::Legacy);
        assert_eq!(counters.functions, 2);
    }

    #[test]
    fn test_function_match_is_case_sensitive() {
        let counters = classify("void Function(void);\n", ClassifyMode::Legacy);
        assert_eq!(counters.functions, 0);
    }

    #[test]
    fn test_class_prefix_after_trimming() {
        let content = "  class Foo {\nclasses everywhere\nmy class\n";
        let counters = classify(content, ClassifyMode::Legacy);
        // "class Foo {" and "classes everywhere" both start with "class";
        // "my class" does not.
        assert_eq!(counters.classes, 2);
        // "class Foo {" is not trim-equal to a lone brace
        assert_eq!(counters.bracket_lines, 0);
    }

    #[test]
    fn test_multi_line_block_comment() {
        let content = "/*\n * body\n */\nint x;\n";
        let counters = classify(content, ClassifyMode::Legacy);
        assert_eq!(counters.comment_blocks, 1);
        // open line + body line + close line
        assert_eq!(counters.commented_lines, 3);
    }

    #[test]
    fn test_one_line_block_comment_stays_open_in_legacy_mode() {
        // The close marker is only honored on a later line, so the line
        // after a one-liner block comment is still counted as commented.
        let content = "/* single line comment */\ncode();\n";
        let counters = classify(content, ClassifyMode::Legacy);
        assert_eq!(counters.comment_blocks, 1);
        assert_eq!(counters.commented_lines, 2);

        let mut classifier = Classifier::new(ClassifyMode::Legacy);
        let mut scratch = Counters::new();
        classifier.classify_line("/* single line comment */", &mut scratch);
        assert!(classifier.in_block_comment());
    }

    #[test]
    fn test_one_line_block_comment_closes_in_corrected_mode() {
        let content = "/* single line comment */\ncode();\n";
        let counters = classify(content, ClassifyMode::Corrected);
        assert_eq!(counters.comment_blocks, 1);
        assert_eq!(counters.commented_lines, 1);

        let mut classifier = Classifier::new(ClassifyMode::Corrected);
        let mut scratch = Counters::new();
        classifier.classify_line("/* single line comment */", &mut scratch);
        assert!(!classifier.in_block_comment());
    }

    #[test]
    fn test_line_comment_with_block_open_double_counts_in_legacy_mode() {
        let counters = classify("// note /* aside\n", ClassifyMode::Legacy);
        assert_eq!(counters.commented_lines, 2);
        assert_eq!(counters.comment_blocks, 1);
    }

    #[test]
    fn test_line_comment_with_block_open_counts_once_in_corrected_mode() {
        let counters = classify("// note /* aside\n", ClassifyMode::Corrected);
        assert_eq!(counters.commented_lines, 1);
        assert_eq!(counters.comment_blocks, 1);
    }

    #[test]
    fn test_close_before_open_still_opens_in_corrected_mode() {
        // "*/ ... /*" has no close after the open, so the block stays open.
        let mut classifier = Classifier::new(ClassifyMode::Corrected);
        let mut counters = Counters::new();
        classifier.classify_line("*/ stray /* open", &mut counters);
        assert!(classifier.in_block_comment());
    }

    #[test]
    fn test_state_is_per_file() {
        let mut counters = Counters::new();
        classify_lines("/* open".lines(), ClassifyMode::Legacy, &mut counters);
        // A fresh call starts outside any block comment.
        classify_lines("int x;".lines(), ClassifyMode::Legacy, &mut counters);
        assert_eq!(counters.commented_lines, 1);
    }

    #[test]
    fn test_line_count_returned() {
        let mut counters = Counters::new();
        let n = classify_lines(
            "a\nb\nc".lines(),
            ClassifyMode::Legacy,
            &mut counters,
        );
        assert_eq!(n, 3);
    }

    #[test]
    fn test_bracket_lines_with_whitespace() {
        let content = "  {  \n}\n{ }\n";
        let counters = classify(content, ClassifyMode::Legacy);
        // "{ }" trims to "{ }", not a lone brace
        assert_eq!(counters.bracket_lines, 2);
    }
}
