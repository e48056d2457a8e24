use serde::{Deserialize, Serialize};

/// A single file handed to the engine by the retrieval layer.
///
/// `content` is the full decoded text of the file. Callers are responsible
/// for filtering out binary or unreadable files before analysis.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileInput {
    pub path: String,
    pub content: String,
}

impl FileInput {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Classical software-science metrics derived from operator/operand counts.
///
/// `volume` and `effort` are stored rounded to the nearest integer,
/// `difficulty` and `bugs_delivered` to 2 decimal places.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HalsteadMetrics {
    pub vocabulary: usize,
    pub length: usize,
    pub volume: f64,
    pub difficulty: f64,
    pub effort: f64,
    pub bugs_delivered: f64,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum MaintainabilityRating {
    Good,
    Moderate,
    Difficult,
}

impl MaintainabilityRating {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s > 85 => MaintainabilityRating::Good,
            s if s > 65 => MaintainabilityRating::Moderate,
            _ => MaintainabilityRating::Difficult,
        }
    }
}

impl std::fmt::Display for MaintainabilityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MaintainabilityRating::Good => "Good",
            MaintainabilityRating::Moderate => "Moderate",
            MaintainabilityRating::Difficult => "Difficult",
        };
        write!(f, "{s}")
    }
}

/// Composite 0-100 maintainability score with its qualitative band.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MaintainabilityIndex {
    pub score: u32,
    pub rating: MaintainabilityRating,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s > 75 => RiskLevel::Critical,
            s if s > 50 => RiskLevel::High,
            s if s > 25 => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }

    /// Dashboard color associated with this level.
    pub fn color(&self) -> &'static str {
        static COLORS: &[(RiskLevel, &str)] = &[
            (RiskLevel::Low, "green"),
            (RiskLevel::Medium, "yellow"),
            (RiskLevel::High, "orange"),
            (RiskLevel::Critical, "red"),
        ];

        COLORS
            .iter()
            .find(|(level, _)| level == self)
            .map(|(_, color)| *color)
            .unwrap_or("green")
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        };
        write!(f, "{s}")
    }
}

/// Summary of the per-file metrics that fed a risk assessment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSnapshot {
    pub cyclomatic: u32,
    pub cognitive: u32,
    pub maintainability_index: u32,
    pub halstead_bugs: f64,
    pub lines: usize,
    pub comment_ratio: f64,
}

/// Outcome of classifying a single file.
///
/// Invariant: when `excluded` is true, `score` is 0 and `level` is `Low`.
/// `factors` is never empty.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub score: u32,
    pub level: RiskLevel,
    pub color: String,
    pub factors: Vec<String>,
    pub metrics: Option<MetricsSnapshot>,
    pub excluded: bool,
}

/// One entry of the repository report: a path, its line count, and its
/// risk assessment.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileRiskAnalysis {
    pub path: String,
    pub lines: usize,
    pub risk: RiskAssessment,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum OverallRisk {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for OverallRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OverallRisk::Low => "Low",
            OverallRisk::Medium => "Medium",
            OverallRisk::High => "High",
            OverallRisk::Critical => "Critical",
        };
        write!(f, "{s}")
    }
}

/// Repository-wide aggregation of per-file assessments.
///
/// Constructed once per analysis request and never mutated after return.
/// `total_files_analyzed` counts only non-excluded files; the averages use
/// the same denominator. `total_lines` covers every analyzed file, excluded
/// ones included.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryComplexityReport {
    pub files: Vec<FileRiskAnalysis>,
    pub top_risky_files: Vec<FileRiskAnalysis>,
    pub average_cyclomatic: f64,
    pub average_cognitive: f64,
    pub total_lines: usize,
    pub high_risk_file_count: usize,
    pub critical_risk_file_count: usize,
    pub total_files_analyzed: usize,
    pub overall_risk: OverallRisk,
}

impl RepositoryComplexityReport {
    /// Render the report in the JSON shape the dashboard consumes.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Cyclomatic change between two versions of a file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityDelta {
    pub old_complexity: u32,
    pub new_complexity: u32,
    pub delta: i64,
    pub percent_change: f64,
}
