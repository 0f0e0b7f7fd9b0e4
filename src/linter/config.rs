//! Configuration for the convlint linter.
//!
//! Provides the knobs a CI integration needs:
//! - Rule ignoring
//! - Path ignoring
//! - Failure thresholds
//! - Loading from a YAML config file

use crate::linter::types::{RuleCode, Severity};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the convlint linter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvlintConfig {
    /// Rule codes to skip entirely (e.g., "CVL003").
    #[serde(default)]
    pub ignore_rules: Vec<String>,

    /// Glob patterns for paths to ignore.
    #[serde(default)]
    pub ignore_paths: Vec<String>,

    /// Minimum severity to report. Findings below this threshold are filtered.
    #[serde(default)]
    pub failure_threshold: Severity,

    /// If true, never signal failure through the exit code.
    #[serde(default)]
    pub no_fail: bool,
}

impl Default for ConvlintConfig {
    fn default() -> Self {
        Self {
            ignore_rules: Vec::new(),
            ignore_paths: Vec::new(),
            failure_threshold: Severity::Warning,
            no_fail: false,
        }
    }
}

impl ConvlintConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule code to the ignore list.
    pub fn ignore_rule(mut self, code: impl Into<String>) -> Self {
        self.ignore_rules.push(code.into());
        self
    }

    /// Add a path pattern to ignore.
    pub fn ignore_path(mut self, pattern: impl Into<String>) -> Self {
        self.ignore_paths.push(pattern.into());
        self
    }

    /// Set the failure threshold.
    pub fn with_threshold(mut self, threshold: Severity) -> Self {
        self.failure_threshold = threshold;
        self
    }

    /// Check if a rule is ignored.
    pub fn is_rule_ignored(&self, code: &RuleCode) -> bool {
        self.ignore_rules.iter().any(|c| c == code.as_str())
    }

    /// Check if a file path should be ignored based on ignore_paths patterns.
    pub fn should_ignore_path(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        for pattern in &self.ignore_paths {
            if let Ok(glob) = glob::Pattern::new(pattern) {
                if glob.matches(&path_str) {
                    return true;
                }
            }
            // Also check simple prefix/suffix matches
            if path_str.contains(pattern) {
                return true;
            }
        }
        false
    }

    /// Load configuration from a YAML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Self::load_from_str(&content)
    }

    /// Load configuration from a YAML string.
    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Try to load config from default locations (.convlint.yml, .convlint.yaml).
    pub fn load_from_default() -> Option<Self> {
        for filename in &[".convlint.yml", ".convlint.yaml"] {
            let path = Path::new(filename);
            if path.exists() {
                if let Ok(config) = Self::load_from_file(path) {
                    return Some(config);
                }
            }
        }
        None
    }
}

/// Configuration errors.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// I/O error reading config file.
    IoError(String),
    /// Parse error in config file.
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConvlintConfig::default();
        assert!(config.ignore_rules.is_empty());
        assert!(config.ignore_paths.is_empty());
        assert!(!config.no_fail);
        assert_eq!(config.failure_threshold, Severity::Warning);
    }

    #[test]
    fn test_config_builder() {
        let config = ConvlintConfig::new()
            .ignore_rule("CVL003")
            .with_threshold(Severity::Error);

        assert!(config.is_rule_ignored(&RuleCode::new("CVL003")));
        assert!(!config.is_rule_ignored(&RuleCode::new("CVL001")));
        assert_eq!(config.failure_threshold, Severity::Error);
    }

    #[test]
    fn test_path_ignoring() {
        let config = ConvlintConfig::new()
            .ignore_path("**/legacy/**")
            .ignore_path("scratch/");

        assert!(config.should_ignore_path(Path::new("scratch/team/alice-smith.yml")));
        assert!(!config.should_ignore_path(Path::new("team/alice-smith.yml")));
    }

    #[test]
    fn test_load_from_str() {
        let yaml = r#"
ignoreRules:
  - CVL001
ignorePaths:
  - "**/generated/**"
failureThreshold: error
noFail: true
"#;
        let config = ConvlintConfig::load_from_str(yaml).unwrap();
        assert!(config.is_rule_ignored(&RuleCode::new("CVL001")));
        assert!(config.no_fail);
        assert_eq!(config.failure_threshold, Severity::Error);
    }

    #[test]
    fn test_load_from_str_invalid() {
        assert!(ConvlintConfig::load_from_str("ignoreRules: {not: a list}").is_err());
    }
}
