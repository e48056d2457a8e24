use riskmap::{FileInput, RiskAnalyzer, RiskLevel};

fn branchy_line() -> &'static str {
    "if (a && b || c) { if (d) { if (e) { f(); } } }\n"
}

#[test]
fn test_excluded_paths_short_circuit() {
    let analyzer = RiskAnalyzer::default();
    for path in ["config.json", "notes.md", "deploy.yaml", "src/app.test.js"] {
        let file = FileInput::new(path, branchy_line().repeat(200));
        let risk = analyzer.assess_risk(&file);
        assert!(risk.excluded, "{path} should be excluded");
        assert_eq!(risk.score, 0);
        assert_eq!(risk.level, RiskLevel::Low);
        assert_eq!(risk.color, "green");
        assert!(risk.metrics.is_none(), "excluded files skip metrics");
        assert_eq!(
            risk.factors,
            vec!["Configuration/Test file - excluded from risk analysis".to_string()]
        );
    }
}

#[test]
fn test_factors_never_empty() {
    let analyzer = RiskAnalyzer::default();
    // A tiny, well-commented file fires no tier at all.
    let file = FileInput::new("src/tiny.rs", "// add one\nx = x + 1; // done\n");
    let risk = analyzer.assess_risk(&file);
    assert_eq!(risk.factors, vec!["Code quality is acceptable".to_string()]);
    assert_eq!(risk.level, RiskLevel::Low);
    assert!(!risk.excluded);
}

#[test]
fn test_score_is_bounded() {
    let analyzer = RiskAnalyzer::default();
    let worst = FileInput::new("src/huge.js", branchy_line().repeat(2000));
    let risk = analyzer.assess_risk(&worst);
    assert!(risk.score <= 100);
    assert_eq!(risk.level, RiskLevel::Critical);
    assert_eq!(risk.color, "red");
}

#[test]
fn test_empty_content_is_low_risk_not_an_error() {
    let analyzer = RiskAnalyzer::default();
    let risk = analyzer.assess_risk(&FileInput::new("src/empty.rs", ""));
    assert!(risk.score <= 25, "empty file must not look risky");
    assert!(!risk.excluded);
}

#[test]
fn test_init_file_dampening_lowers_the_score() {
    let analyzer = RiskAnalyzer::default();
    let content = branchy_line().repeat(400);

    let normal = analyzer.assess_risk(&FileInput::new("src/engine.js", content.clone()));
    let dampened = analyzer.assess_risk(&FileInput::new("src/index.js", content));

    assert!(
        dampened.score < normal.score,
        "dampened {} should be below normal {}",
        dampened.score,
        normal.score
    );
}

#[test]
fn test_dampening_spares_non_structural_categories() {
    // Sparse documentation fires the same way for both paths; only the
    // complexity and size contributions shrink.
    let analyzer = RiskAnalyzer::default();
    let content = branchy_line().repeat(400);

    let normal = analyzer.assess_risk(&FileInput::new("src/engine.js", content.clone()));
    let dampened = analyzer.assess_risk(&FileInput::new("src/index.js", content));

    let doc_factor = |factors: &[String]| {
        factors
            .iter()
            .find(|f| f.contains("documentation") || f.contains("comment"))
            .cloned()
    };
    assert_eq!(doc_factor(&normal.factors), doc_factor(&dampened.factors));
}

#[test]
fn test_factor_strings_name_the_tier() {
    let analyzer = RiskAnalyzer::default();
    let file = FileInput::new("src/engine.js", branchy_line().repeat(2000));
    let risk = analyzer.assess_risk(&file);

    assert!(risk
        .factors
        .iter()
        .any(|f| f.starts_with("Critical cyclomatic complexity:")));
    assert!(risk.factors.iter().any(|f| f.contains("large file")));
}

#[test]
fn test_determinism() {
    let analyzer = RiskAnalyzer::default();
    let file = FileInput::new("src/engine.js", branchy_line().repeat(50));
    assert_eq!(analyzer.assess_risk(&file), analyzer.assess_risk(&file));
}

#[test]
fn test_level_bands() {
    assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(25), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(26), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(50), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(51), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(75), RiskLevel::High);
    assert_eq!(RiskLevel::from_score(76), RiskLevel::Critical);
    assert_eq!(RiskLevel::from_score(100), RiskLevel::Critical);
}
