//! Plain-text report rendering.

use crate::stats::ScanStats;

/// Render the final statistics as a flat human-readable report.
///
/// Pure function of the statistics record; never fails. Emits the total
/// and adjusted line counts, the six general counters, then the
/// included and excluded path listings with their counts. Structured
/// consumers should serialize [`ScanStats`] directly instead of parsing
/// this text.
pub fn render(stats: &ScanStats) -> String {
    let mut out = String::new();

    out.push_str(&format!("Total lines: {}\n", stats.total_lines));
    out.push_str(&format!("Adjusted lines: {}\n", stats.adjusted_lines()));
    out.push_str(&format!(
        "Commented lines: {}\n",
        stats.counters.commented_lines
    ));
    out.push_str(&format!("Blank lines: {}\n", stats.counters.blank_lines));
    out.push_str(&format!(
        "Bracket lines: {}\n",
        stats.counters.bracket_lines
    ));
    out.push_str(&format!(
        "Comment blocks: {}\n",
        stats.counters.comment_blocks
    ));
    out.push_str(&format!("Classes: {}\n", stats.counters.classes));
    out.push_str(&format!("Functions: {}\n", stats.counters.functions));

    out.push('\n');
    out.push_str(&format!(
        "Included files ({}):\n",
        stats.included_files.len()
    ));
    for path in &stats.included_files {
        out.push_str(&format!("  {}\n", path.display()));
    }

    out.push('\n');
    out.push_str(&format!(
        "Excluded files & directories ({}):\n",
        stats.excluded_files.len()
    ));
    for path in &stats.excluded_files {
        out.push_str(&format!("  {}\n", path.display()));
    }

    out
}
