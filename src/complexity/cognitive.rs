//! Cognitive complexity via a nesting-weighted line pass.
//!
//! Tracks brace depth line by line and charges each control-flow line and
//! each logical operator `1 + nesting`. The depth counter follows raw brace
//! counts, so unbalanced fragments can push it negative transiently; that is
//! left unclamped to match the calibrated heuristic.

use once_cell::sync::Lazy;
use regex::Regex;

static CONTROL_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(if|for|while|switch|catch)\s*\(").unwrap());

static LOGICAL_OPERATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"&&|\|\|").unwrap());

/// Calculate cognitive complexity for a whole file's text.
pub fn calculate_cognitive(content: &str) -> u32 {
    let mut nesting_level: i64 = 0;
    let mut complexity: i64 = 0;

    for line in content.lines() {
        let opens = line.matches('{').count() as i64;
        let closes = line.matches('}').count() as i64;
        nesting_level += opens - closes;

        if CONTROL_KEYWORD.is_match(line) {
            complexity += 1 + nesting_level;
        }

        let logical_ops = LOGICAL_OPERATOR.find_iter(line).count() as i64;
        complexity += logical_ops * (1 + nesting_level);
    }

    complexity.max(0) as u32
}
