//! Maintainability index blending complexity, Halstead volume, size, and
//! comment density into a 0-100 score.

use crate::complexity::{comment_ratio, count_non_blank_lines};
use crate::core::{MaintainabilityIndex, MaintainabilityRating};

/// Calculate the maintainability index for a file.
///
/// `cyclomatic` and `halstead_volume` are the values produced by the other
/// extractors for the same text. The classic 171-point formula is
/// normalized to 0-100, then boosted by up to `comment_ratio * 10` points
/// and capped at 100.
pub fn calculate_maintainability(
    cyclomatic: u32,
    halstead_volume: f64,
    content: &str,
) -> MaintainabilityIndex {
    let lines = count_non_blank_lines(content);
    let ratio = comment_ratio(content);

    let volume = halstead_volume.max(1.0);
    let line_count = lines.max(1) as f64;

    let raw = 171.0 - 5.2 * volume.ln() - 0.23 * cyclomatic as f64 - 16.2 * line_count.ln();
    let normalized = (raw * 100.0 / 171.0).max(0.0);
    let boosted = (normalized + ratio * 10.0).min(100.0);

    let score = boosted.round() as u32;
    MaintainabilityIndex {
        score,
        rating: MaintainabilityRating::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_scores_full_marks() {
        // V and L both floor at 1, so the raw value is 171 - 0.23 * 0 = 171.
        let mi = calculate_maintainability(0, 0.0, "");
        assert_eq!(mi.score, 100);
        assert_eq!(mi.rating, MaintainabilityRating::Good);
    }

    #[test]
    fn score_never_goes_negative() {
        let mi = calculate_maintainability(500, 1e9, &"x\n".repeat(100_000));
        assert_eq!(mi.score, 0);
        assert_eq!(mi.rating, MaintainabilityRating::Difficult);
    }

    #[test]
    fn comments_boost_the_score() {
        // Trailing comments keep the line count identical, so the only
        // difference is the ratio boost.
        let plain = "let a = 1;\n".repeat(100);
        let commented = "let a = 1; // note\n".repeat(100);
        let without = calculate_maintainability(5, 500.0, &plain);
        let with = calculate_maintainability(5, 500.0, &commented);
        assert!(with.score > without.score);
    }

    #[test]
    fn rating_bands() {
        assert_eq!(MaintainabilityRating::from_score(86), MaintainabilityRating::Good);
        assert_eq!(MaintainabilityRating::from_score(85), MaintainabilityRating::Moderate);
        assert_eq!(MaintainabilityRating::from_score(66), MaintainabilityRating::Moderate);
        assert_eq!(MaintainabilityRating::from_score(65), MaintainabilityRating::Difficult);
    }
}
