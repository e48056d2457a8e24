//! Cyclomatic complexity via lexical branch counting.
//!
//! Counts branch keywords and logical operators with non-overlapping regex
//! scans over the raw text. Deliberately approximate: no parsing, works
//! across brace-family languages.

use once_cell::sync::Lazy;
use regex::Regex;

static BRANCH_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\bif\s*\(",
        r"\bfor\s*\(",
        r"\bwhile\s*\(",
        r"\bcase\s+\w+",
        r"\bcatch\s*\(",
        r"\?[^:]*:",
        r"&&",
        r"\|\|",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Calculate cyclomatic complexity: 1 plus the number of branch points.
///
/// Empty input returns 0 rather than the base 1; callers treating a missing
/// file as empty get a zeroed metric instead of a phantom path.
pub fn calculate_cyclomatic(content: &str) -> u32 {
    if content.is_empty() {
        return 0;
    }

    let branches: usize = BRANCH_PATTERNS
        .iter()
        .map(|pattern| pattern.find_iter(content).count())
        .sum();

    1 + branches as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_base_path() {
        assert_eq!(calculate_cyclomatic(""), 0);
    }

    #[test]
    fn straight_line_code_is_one() {
        assert_eq!(calculate_cyclomatic("let x = 1;\nlet y = x;"), 1);
    }

    #[test]
    fn whitespace_before_paren_is_tolerated() {
        assert_eq!(calculate_cyclomatic("if (a) {}"), 2);
        assert_eq!(calculate_cyclomatic("if(a) {}"), 2);
    }

    #[test]
    fn logical_operators_each_count() {
        assert_eq!(calculate_cyclomatic("if (a && b || c) {}"), 4);
    }

    #[test]
    fn case_labels_count() {
        let src = "switch (x) { case one: break; case two: break; }";
        assert_eq!(calculate_cyclomatic(src), 3);
    }
}
