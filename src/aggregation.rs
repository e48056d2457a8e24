//! Repository aggregation: per-file assessment, ranking, and summary counts.

use crate::complexity::count_lines;
use crate::core::{FileInput, FileRiskAnalysis, OverallRisk, RepositoryComplexityReport};
use crate::risk::RiskAnalyzer;
use rayon::prelude::*;
use std::cmp::Reverse;

/// The report surfaces at most this many ranked non-excluded files.
pub const TOP_RISKY_FILE_LIMIT: usize = 15;

/// Analyze every file and build the repository report.
///
/// Per-file work runs in parallel; the final sort is a pure function of the
/// completed results, so the report does not depend on scheduling order.
/// Equal scores keep the input order (stable sort over an order-preserving
/// collect), making repeated runs bit-identical.
pub fn analyze_repository(
    files: &[FileInput],
    analyzer: &RiskAnalyzer,
) -> RepositoryComplexityReport {
    let mut analyses: Vec<FileRiskAnalysis> = files
        .par_iter()
        .filter(|file| !file.content.is_empty())
        .map(|file| FileRiskAnalysis {
            path: file.path.clone(),
            lines: count_lines(&file.content),
            risk: analyzer.assess_risk(file),
        })
        .collect();

    let total_lines: usize = analyses.iter().map(|analysis| analysis.lines).sum();

    let mut total_cyclomatic: u64 = 0;
    let mut total_cognitive: u64 = 0;
    let mut total_files_analyzed = 0usize;
    let mut high_risk_file_count = 0usize;
    let mut critical_risk_file_count = 0usize;

    for analysis in analyses.iter().filter(|a| !a.risk.excluded) {
        total_files_analyzed += 1;
        if let Some(metrics) = &analysis.risk.metrics {
            total_cyclomatic += u64::from(metrics.cyclomatic);
            total_cognitive += u64::from(metrics.cognitive);
        }
        if analysis.risk.score > 75 {
            critical_risk_file_count += 1;
        }
        if analysis.risk.score > 50 {
            high_risk_file_count += 1;
        }
    }

    // Excluded entries sort last regardless of score.
    analyses.sort_by_key(|analysis| (analysis.risk.excluded, Reverse(analysis.risk.score)));

    let top_risky_files: Vec<FileRiskAnalysis> = analyses
        .iter()
        .filter(|analysis| !analysis.risk.excluded)
        .take(TOP_RISKY_FILE_LIMIT)
        .cloned()
        .collect();

    let average_cyclomatic = average(total_cyclomatic, total_files_analyzed);
    let average_cognitive = average(total_cognitive, total_files_analyzed);

    let overall_risk = overall_risk(
        critical_risk_file_count,
        high_risk_file_count,
        total_files_analyzed,
    );

    log::debug!(
        "analyzed {total_files_analyzed} of {} files: {critical_risk_file_count} critical, \
         {high_risk_file_count} high, overall {overall_risk}",
        files.len(),
    );

    RepositoryComplexityReport {
        files: analyses,
        top_risky_files,
        average_cyclomatic,
        average_cognitive,
        total_lines,
        high_risk_file_count,
        critical_risk_file_count,
        total_files_analyzed,
        overall_risk,
    }
}

fn average(total: u64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let raw = total as f64 / count as f64;
    (raw * 100.0).round() / 100.0
}

fn overall_risk(critical: usize, high: usize, analyzed: usize) -> OverallRisk {
    let analyzed = analyzed as f64;
    if critical > 0 {
        OverallRisk::Critical
    } else if high as f64 > 0.3 * analyzed {
        OverallRisk::High
    } else if high as f64 > 0.1 * analyzed {
        OverallRisk::Medium
    } else {
        OverallRisk::Low
    }
}
