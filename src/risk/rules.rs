//! Path policy rules: which files are excluded from scoring and which get
//! the entry-point dampening multiplier.
//!
//! The rules form an ordered list evaluated top to bottom; the first rule
//! whose predicate matches decides the disposition. Each predicate is a pure
//! function of the path string.

use once_cell::sync::Lazy;
use regex::Regex;

/// How the classifier should treat a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathDisposition {
    /// Config or test file: score 0, no metrics computed.
    Excluded,
    /// Conventional entry-point file: complexity and size sub-scores are
    /// multiplied by 0.3.
    Dampened,
    /// Scored normally.
    Scored,
}

static CONFIG_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(config|rc|json|ya?ml|toml|lock|md|txt)$").unwrap());

static INIT_FILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|/)(index\.(js|ts|jsx|tsx)|__init__\.py|setup\.py|package\.json)$").unwrap()
});

fn is_config_extension(path: &str) -> bool {
    CONFIG_EXTENSION.is_match(path)
}

fn is_test_convention(path: &str) -> bool {
    let lower = path.to_lowercase();
    [".test.", ".spec.", "test", "spec"]
        .iter()
        .any(|marker| lower.contains(marker))
}

fn is_init_file(path: &str) -> bool {
    INIT_FILE.is_match(path)
}

struct PathRule {
    name: &'static str,
    applies: fn(&str) -> bool,
    disposition: PathDisposition,
}

static PATH_RULES: &[PathRule] = &[
    PathRule {
        name: "config-extension",
        applies: is_config_extension,
        disposition: PathDisposition::Excluded,
    },
    PathRule {
        name: "test-convention",
        applies: is_test_convention,
        disposition: PathDisposition::Excluded,
    },
    PathRule {
        name: "init-file",
        applies: is_init_file,
        disposition: PathDisposition::Dampened,
    },
];

/// Evaluate the rule list for a path; the first match wins.
pub fn evaluate_path(path: &str) -> PathDisposition {
    PATH_RULES
        .iter()
        .find(|rule| (rule.applies)(path))
        .map(|rule| {
            log::trace!("path {path} matched rule {}", rule.name);
            rule.disposition
        })
        .unwrap_or(PathDisposition::Scored)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_extensions_are_excluded() {
        for path in [
            "settings.json",
            "app.CONFIG",
            "service.rc",
            "deploy.yaml",
            "deploy.yml",
            "Cargo.toml",
            "Cargo.lock",
            "README.md",
            "notes.TXT",
        ] {
            assert_eq!(evaluate_path(path), PathDisposition::Excluded, "{path}");
        }
    }

    #[test]
    fn test_conventions_are_excluded() {
        for path in [
            "src/app.test.js",
            "src/app.spec.ts",
            "tests/helpers.js",
            "SpecRunner.java",
            "my_test_util.py",
        ] {
            assert_eq!(evaluate_path(path), PathDisposition::Excluded, "{path}");
        }
    }

    #[test]
    fn init_files_are_dampened() {
        for path in ["index.js", "src/index.tsx", "pkg/__init__.py", "setup.py"] {
            assert_eq!(evaluate_path(path), PathDisposition::Dampened, "{path}");
        }
    }

    #[test]
    fn exclusion_outranks_dampening() {
        // package.json matches both the config-extension rule and the
        // init-file rule; the earlier rule wins.
        assert_eq!(evaluate_path("package.json"), PathDisposition::Excluded);
    }

    #[test]
    fn ordinary_sources_are_scored() {
        for path in ["src/main.rs", "lib/engine.js", "server/api.py"] {
            assert_eq!(evaluate_path(path), PathDisposition::Scored, "{path}");
        }
    }

    #[test]
    fn index_inside_directory_name_does_not_dampen() {
        assert_eq!(evaluate_path("reindex.js"), PathDisposition::Scored);
        assert_eq!(evaluate_path("src/indexer.ts"), PathDisposition::Scored);
    }
}
