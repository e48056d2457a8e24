use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Risk category weights. The defaults sum to 1.0 and reproduce the
/// calibrated scoring model; overrides come from `riskmap.toml`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScoringWeights {
    /// Weight for the complexity category (0.0-1.0)
    #[serde(default = "default_complexity_weight")]
    pub complexity: f64,

    /// Weight for the maintainability category (0.0-1.0)
    #[serde(default = "default_maintainability_weight")]
    pub maintainability: f64,

    /// Weight for the file-size category (0.0-1.0)
    #[serde(default = "default_size_weight")]
    pub size: f64,

    /// Weight for the documentation category (0.0-1.0)
    #[serde(default = "default_documentation_weight")]
    pub documentation: f64,

    /// Weight for the Halstead bug-potential category (0.0-1.0)
    #[serde(default = "default_bug_potential_weight")]
    pub bug_potential: f64,
}

fn default_complexity_weight() -> f64 {
    0.30
}

fn default_maintainability_weight() -> f64 {
    0.25
}

fn default_size_weight() -> f64 {
    0.20
}

fn default_documentation_weight() -> f64 {
    0.15
}

fn default_bug_potential_weight() -> f64 {
    0.10
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            complexity: default_complexity_weight(),
            maintainability: default_maintainability_weight(),
            size: default_size_weight(),
            documentation: default_documentation_weight(),
            bug_potential: default_bug_potential_weight(),
        }
    }
}

impl ScoringWeights {
    fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{name} weight must be between 0.0 and 1.0"))
        }
    }

    fn sum(&self) -> f64 {
        self.complexity + self.maintainability + self.size + self.documentation + self.bug_potential
    }

    /// Validate that each weight is in range and that they sum to 1.0
    /// (with a small tolerance for floating point).
    pub fn validate(&self) -> Result<(), String> {
        for validation in [
            Self::validate_weight(self.complexity, "Complexity"),
            Self::validate_weight(self.maintainability, "Maintainability"),
            Self::validate_weight(self.size, "Size"),
            Self::validate_weight(self.documentation, "Documentation"),
            Self::validate_weight(self.bug_potential, "Bug potential"),
        ] {
            validation?;
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > 0.001 {
            return Err(format!(
                "Scoring weights must sum to 1.0, but sum to {sum:.3}"
            ));
        }
        Ok(())
    }

    /// Rescale the weights so they sum to 1.0. No-op when the sum is 0.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 {
            self.complexity /= sum;
            self.maintainability /= sum;
            self.size /= sum;
            self.documentation /= sum;
            self.bug_potential /= sum;
        }
    }
}

/// Top-level configuration, deserialized from `riskmap.toml`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RiskmapConfig {
    #[serde(default)]
    pub scoring: ScoringWeights,
}

/// Load and validate a configuration file.
pub fn load_config(path: &Path) -> anyhow::Result<RiskmapConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config from {}", path.display()))?;
    let config: RiskmapConfig = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config from {}", path.display()))?;
    config
        .scoring
        .validate()
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("invalid scoring weights in {}", path.display()))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}
