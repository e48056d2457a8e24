//! Halstead software-science metrics from lexical token counts.
//!
//! Operators are single characters from a fixed class; operands are
//! identifiers or numeric literals. Distinct and total counts drive the
//! derived vocabulary/length/volume/difficulty/effort/bugs values. All
//! denominators are floored at 1 so the functions stay total.

use crate::core::HalsteadMetrics;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static OPERATOR_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+\-*/%=<>!&|?:,;(){}\[\]]").unwrap());

static OPERAND_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z_$][a-zA-Z0-9_$]*|\d+(?:\.\d+)?").unwrap());

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Calculate Halstead metrics for a file's text.
pub fn calculate_halstead(content: &str) -> HalsteadMetrics {
    let mut distinct_operators: HashSet<&str> = HashSet::new();
    let mut total_operators = 0usize;
    for token in OPERATOR_TOKEN.find_iter(content) {
        distinct_operators.insert(token.as_str());
        total_operators += 1;
    }

    let mut distinct_operands: HashSet<&str> = HashSet::new();
    let mut total_operands = 0usize;
    for token in OPERAND_TOKEN.find_iter(content) {
        distinct_operands.insert(token.as_str());
        total_operands += 1;
    }

    let n1 = distinct_operators.len();
    let n2 = distinct_operands.len();
    let vocabulary = n1 + n2;
    let length = total_operators + total_operands;

    let volume = length as f64 * (vocabulary.max(1) as f64).log2();
    let difficulty = (n1 as f64 / 2.0) * (total_operands as f64 / n2.max(1) as f64);
    let effort = difficulty * volume;
    let bugs_delivered = volume / 3000.0;

    HalsteadMetrics {
        vocabulary,
        length,
        volume: volume.round(),
        difficulty: round2(difficulty),
        effort: effort.round(),
        bugs_delivered: round2(bugs_delivered),
    }
}
