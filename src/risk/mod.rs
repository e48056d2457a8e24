//! Risk classifier: turns one file's metrics into a weighted 0-100 score.

pub mod rules;

use crate::complexity::{compute_file_metrics, FileMetrics};
use crate::config::ScoringWeights;
use crate::core::{FileInput, MetricsSnapshot, RiskAssessment, RiskLevel};
use rules::{evaluate_path, PathDisposition};

/// Multiplier applied to the complexity and size sub-scores of conventional
/// entry-point files, which are expected to be structurally simple.
pub const INIT_FILE_DAMPENING: f64 = 0.3;

const EXCLUDED_FACTOR: &str = "Configuration/Test file - excluded from risk analysis";
const ACCEPTABLE_FACTOR: &str = "Code quality is acceptable";

/// Stateless classifier. Holds only the category weights; every call is
/// referentially transparent.
#[derive(Clone, Debug, Default)]
pub struct RiskAnalyzer {
    pub weights: ScoringWeights,
}

impl RiskAnalyzer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Assess one file. Total: malformed or empty content produces a valid
    /// low-risk result, never an error.
    pub fn assess_risk(&self, file: &FileInput) -> RiskAssessment {
        let disposition = evaluate_path(&file.path);
        if disposition == PathDisposition::Excluded {
            return excluded_assessment();
        }

        let metrics = compute_file_metrics(&file.content);
        let dampening = match disposition {
            PathDisposition::Dampened => INIT_FILE_DAMPENING,
            _ => 1.0,
        };

        let mut factors = Vec::new();

        let (complexity_score, complexity_factors) =
            complexity_subscore(metrics.cyclomatic, metrics.cognitive);
        factors.extend(complexity_factors);

        let (maintainability_score, maintainability_factor) =
            maintainability_subscore(metrics.maintainability.score);
        factors.extend(maintainability_factor);

        let (size_score, size_factor) = size_subscore(metrics.lines);
        factors.extend(size_factor);

        let (documentation_score, documentation_factor) =
            documentation_subscore(metrics.lines, metrics.comment_ratio);
        factors.extend(documentation_factor);

        let (bug_score, bug_factor) = bug_potential_subscore(metrics.halstead.bugs_delivered);
        factors.extend(bug_factor);

        let weighted = self.weights.complexity * complexity_score * dampening
            + self.weights.maintainability * maintainability_score
            + self.weights.size * size_score * dampening
            + self.weights.documentation * documentation_score
            + self.weights.bug_potential * bug_score;

        let score = weighted.clamp(0.0, 100.0).round() as u32;
        let level = RiskLevel::from_score(score);

        if factors.is_empty() {
            factors.push(ACCEPTABLE_FACTOR.to_string());
        }

        RiskAssessment {
            score,
            level,
            color: level.color().to_string(),
            factors,
            metrics: Some(snapshot(&metrics)),
            excluded: false,
        }
    }
}

fn excluded_assessment() -> RiskAssessment {
    RiskAssessment {
        score: 0,
        level: RiskLevel::Low,
        color: RiskLevel::Low.color().to_string(),
        factors: vec![EXCLUDED_FACTOR.to_string()],
        metrics: None,
        excluded: true,
    }
}

fn snapshot(metrics: &FileMetrics) -> MetricsSnapshot {
    MetricsSnapshot {
        cyclomatic: metrics.cyclomatic,
        cognitive: metrics.cognitive,
        maintainability_index: metrics.maintainability.score,
        halstead_bugs: metrics.halstead.bugs_delivered,
        lines: metrics.lines,
        comment_ratio: metrics.comment_ratio,
    }
}

fn cyclomatic_tier(cyclomatic: u32) -> (f64, Option<String>) {
    match cyclomatic {
        c if c > 50 => (100.0, Some(format!("Critical cyclomatic complexity: {c}"))),
        c if c > 30 => (80.0, Some(format!("High cyclomatic complexity: {c}"))),
        c if c > 20 => (60.0, Some(format!("Elevated cyclomatic complexity: {c}"))),
        c if c > 10 => (30.0, Some(format!("Moderate cyclomatic complexity: {c}"))),
        _ => (0.0, None),
    }
}

fn cognitive_tier(cognitive: u32) -> (f64, Option<String>) {
    match cognitive {
        c if c > 50 => (90.0, Some(format!("Critical cognitive complexity: {c}"))),
        c if c > 30 => (70.0, Some(format!("High cognitive complexity: {c}"))),
        c if c > 15 => (40.0, Some(format!("Elevated cognitive complexity: {c}"))),
        _ => (0.0, None),
    }
}

/// The complexity category takes the greater of the cyclomatic and
/// cognitive tiers; every fired tier still contributes its factor string.
fn complexity_subscore(cyclomatic: u32, cognitive: u32) -> (f64, Vec<String>) {
    let (cyclomatic_score, cyclomatic_factor) = cyclomatic_tier(cyclomatic);
    let (cognitive_score, cognitive_factor) = cognitive_tier(cognitive);

    let factors = [cyclomatic_factor, cognitive_factor]
        .into_iter()
        .flatten()
        .collect();

    (cyclomatic_score.max(cognitive_score), factors)
}

fn maintainability_subscore(score: u32) -> (f64, Option<String>) {
    match score {
        s if s < 20 => (100.0, Some(format!("Very low maintainability index: {s}"))),
        s if s < 40 => (70.0, Some(format!("Low maintainability index: {s}"))),
        s if s < 65 => (40.0, Some(format!("Moderate maintainability index: {s}"))),
        _ => (0.0, None),
    }
}

fn size_subscore(lines: usize) -> (f64, Option<String>) {
    match lines {
        l if l > 1000 => (100.0, Some(format!("Very large file: {l} lines"))),
        l if l > 500 => (70.0, Some(format!("Large file: {l} lines"))),
        l if l > 300 => (40.0, Some(format!("Sizable file: {l} lines"))),
        _ => (0.0, None),
    }
}

fn documentation_subscore(lines: usize, ratio: f64) -> (f64, Option<String>) {
    if lines > 100 && ratio < 0.02 {
        (
            80.0,
            Some(format!(
                "Minimal documentation for {lines} lines (comment ratio {ratio:.2})"
            )),
        )
    } else if lines > 50 && ratio < 0.05 {
        (
            50.0,
            Some(format!(
                "Sparse documentation for {lines} lines (comment ratio {ratio:.2})"
            )),
        )
    } else if ratio < 0.10 {
        (
            25.0,
            Some(format!("Low comment density (comment ratio {ratio:.2})")),
        )
    } else {
        (0.0, None)
    }
}

fn bug_potential_subscore(bugs_delivered: f64) -> (f64, Option<String>) {
    if bugs_delivered > 5.0 {
        (
            100.0,
            Some(format!("High Halstead bug estimate: {bugs_delivered:.2}")),
        )
    } else if bugs_delivered > 2.0 {
        (
            60.0,
            Some(format!("Elevated Halstead bug estimate: {bugs_delivered:.2}")),
        )
    } else if bugs_delivered > 1.0 {
        (
            30.0,
            Some(format!("Notable Halstead bug estimate: {bugs_delivered:.2}")),
        )
    } else {
        (0.0, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_are_exclusive() {
        assert_eq!(cyclomatic_tier(10).0, 0.0);
        assert_eq!(cyclomatic_tier(11).0, 30.0);
        assert_eq!(cyclomatic_tier(50).0, 80.0);
        assert_eq!(cyclomatic_tier(51).0, 100.0);

        assert_eq!(cognitive_tier(15).0, 0.0);
        assert_eq!(cognitive_tier(16).0, 40.0);
        assert_eq!(cognitive_tier(51).0, 90.0);

        assert_eq!(maintainability_subscore(19).0, 100.0);
        assert_eq!(maintainability_subscore(20).0, 70.0);
        assert_eq!(maintainability_subscore(64).0, 40.0);
        assert_eq!(maintainability_subscore(65).0, 0.0);

        assert_eq!(size_subscore(300).0, 0.0);
        assert_eq!(size_subscore(301).0, 40.0);
        assert_eq!(size_subscore(1001).0, 100.0);

        assert_eq!(bug_potential_subscore(1.0).0, 0.0);
        assert_eq!(bug_potential_subscore(1.01).0, 30.0);
        assert_eq!(bug_potential_subscore(5.01).0, 100.0);
    }

    #[test]
    fn complexity_category_takes_the_greater_tier() {
        // Cyclomatic 25 -> 60, cognitive 55 -> 90.
        let (score, factors) = complexity_subscore(25, 55);
        assert_eq!(score, 90.0);
        assert_eq!(factors.len(), 2);
    }

    #[test]
    fn well_documented_small_file_has_no_documentation_risk() {
        assert_eq!(documentation_subscore(40, 0.15).0, 0.0);
    }
}
