pub mod cognitive;
pub mod cyclomatic;
pub mod halstead;
pub mod maintainability;

pub use cognitive::calculate_cognitive;
pub use cyclomatic::calculate_cyclomatic;
pub use halstead::calculate_halstead;
pub use maintainability::calculate_maintainability;

use crate::core::{ComplexityDelta, HalsteadMetrics, MaintainabilityIndex};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static COMMENT_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"//|/\*|\*/|#").unwrap());

/// Total line count of a file's text.
pub fn count_lines(content: &str) -> usize {
    content.lines().count()
}

/// Non-blank line count, the L used by the maintainability formula.
pub fn count_non_blank_lines(content: &str) -> usize {
    content.lines().filter(|line| !line.trim().is_empty()).count()
}

/// Occurrences of comment markers (`//`, `/*`, `*/`, `#`) in the text.
pub fn count_comment_markers(content: &str) -> usize {
    COMMENT_MARKER.find_iter(content).count()
}

/// Comment markers per non-blank line, the documentation-density proxy.
pub fn comment_ratio(content: &str) -> f64 {
    count_comment_markers(content) as f64 / count_non_blank_lines(content).max(1) as f64
}

/// All four extractor outputs for one file, plus the line counts the risk
/// classifier needs. Recomputed on every call, never cached.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileMetrics {
    pub cyclomatic: u32,
    pub cognitive: u32,
    pub halstead: HalsteadMetrics,
    pub maintainability: MaintainabilityIndex,
    pub lines: usize,
    pub non_blank_lines: usize,
    pub comment_ratio: f64,
}

/// Run every extractor against one file's text.
pub fn compute_file_metrics(content: &str) -> FileMetrics {
    let cyclomatic = calculate_cyclomatic(content);
    let cognitive = calculate_cognitive(content);
    let halstead = calculate_halstead(content);
    let maintainability = calculate_maintainability(cyclomatic, halstead.volume, content);

    FileMetrics {
        cyclomatic,
        cognitive,
        halstead,
        maintainability,
        lines: count_lines(content),
        non_blank_lines: count_non_blank_lines(content),
        comment_ratio: comment_ratio(content),
    }
}

/// Cyclomatic change between two versions of the same file.
///
/// `percent_change` is relative to the old total, 0 when the old total is 0.
pub fn complexity_delta(old_content: &str, new_content: &str) -> ComplexityDelta {
    let old_complexity = calculate_cyclomatic(old_content);
    let new_complexity = calculate_cyclomatic(new_content);
    let delta = new_complexity as i64 - old_complexity as i64;

    let percent_change = if old_complexity > 0 {
        let raw = delta as f64 / old_complexity as f64 * 100.0;
        (raw * 100.0).round() / 100.0
    } else {
        0.0
    };

    ComplexityDelta {
        old_complexity,
        new_complexity,
        delta,
        percent_change,
    }
}
