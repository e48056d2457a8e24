// Export modules for library usage
pub mod aggregation;
pub mod complexity;
pub mod config;
pub mod core;
pub mod risk;

// Re-export commonly used types
pub use crate::core::{
    ComplexityDelta, FileInput, FileRiskAnalysis, HalsteadMetrics, MaintainabilityIndex,
    MaintainabilityRating, MetricsSnapshot, OverallRisk, RepositoryComplexityReport,
    RiskAssessment, RiskLevel,
};

pub use crate::complexity::{
    calculate_cognitive, calculate_cyclomatic, calculate_halstead, calculate_maintainability,
    comment_ratio, complexity_delta, compute_file_metrics, count_comment_markers, count_lines,
    count_non_blank_lines, FileMetrics,
};

pub use crate::risk::{
    rules::{evaluate_path, PathDisposition},
    RiskAnalyzer,
};

pub use crate::aggregation::{analyze_repository, TOP_RISKY_FILE_LIMIT};

pub use crate::config::{load_config, RiskmapConfig, ScoringWeights};
