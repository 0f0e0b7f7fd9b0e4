//! Core types for the convlint linter.
//!
//! - `Severity` - finding severity levels
//! - `RuleCode` - rule identifiers (e.g., "CVL001")
//! - `RuleCategory` - what aspect of the tree a rule covers
//! - `Finding` - a single convention violation or parse failure

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

/// Severity levels for findings.
///
/// Ordered from most severe to least severe:
/// `Error > Warning > Info`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Violations that fail the check
    Error,
    /// Issues worth reporting but not necessarily gating on
    #[default]
    Warning,
    /// Informational notices
    Info,
}

impl Severity {
    /// Parse a severity from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher severity = lower numeric value for Ord
        let self_val = match self {
            Self::Error => 0,
            Self::Warning => 1,
            Self::Info => 2,
        };
        let other_val = match other {
            Self::Error => 0,
            Self::Warning => 1,
            Self::Info => 2,
        };
        // Reverse so Error > Warning > Info
        other_val.cmp(&self_val)
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// What aspect of the manifest tree a rule covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    /// YAML could not be parsed at all
    Parse,
    /// RBAC filename / object-name conventions
    Naming,
    /// Kustomization resource completeness
    Aggregation,
}

impl RuleCategory {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parse => "parse",
            Self::Naming => "naming",
            Self::Aggregation => "aggregation",
        }
    }
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rule code identifier (e.g., "CVL001").
///
/// "CVL000" is reserved for parse failures and is not backed by a rule
/// module; every other code maps to one entry in `rules::all_rules()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleCode(pub String);

/// Reserved code for unreadable or malformed YAML files.
pub const PARSE_ERROR_CODE: &str = "CVL000";

impl RuleCode {
    /// Create a new rule code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is a CVL rule code.
    pub fn is_cvl_rule(&self) -> bool {
        self.0.starts_with("CVL")
    }

    /// Check if this is the reserved parse-failure code.
    pub fn is_parse_error(&self) -> bool {
        self.0 == PARSE_ERROR_CODE
    }

    /// Get the numeric part of the rule code.
    pub fn number(&self) -> Option<u32> {
        if self.0.starts_with("CVL") {
            self.0[3..].parse().ok()
        } else {
            None
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RuleCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RuleCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for RuleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single convention violation or parse failure found during linting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// The rule code that produced this finding.
    pub code: RuleCode,
    /// The severity of the finding.
    pub severity: Severity,
    /// A human-readable message describing the violation.
    pub message: String,
    /// The file the finding is tied to.
    pub file_path: PathBuf,
    /// Line number of the offending document (1-indexed), when known.
    pub line: Option<u32>,
    /// The value the convention expected, for mismatch findings.
    pub expected: Option<String>,
    /// The value actually found, for mismatch findings.
    pub found: Option<String>,
}

impl Finding {
    /// Create a new finding.
    pub fn new(
        code: impl Into<RuleCode>,
        severity: Severity,
        message: impl Into<String>,
        file_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            code: code.into(),
            severity,
            message: message.into(),
            file_path: file_path.into(),
            line: None,
            expected: None,
            found: None,
        }
    }

    /// Create a parse-failure finding for a file.
    pub fn parse_error(file_path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::new(PARSE_ERROR_CODE, Severity::Error, message, file_path)
    }

    /// Set the line number.
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Record the expected and found values of a mismatch.
    pub fn with_expectation(
        mut self,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        self.expected = Some(expected.into());
        self.found = Some(found.into());
        self
    }
}

impl Ord for Finding {
    fn cmp(&self, other: &Self) -> Ordering {
        // Sort by file path, then by line number, then by severity
        match self.file_path.cmp(&other.file_path) {
            Ordering::Equal => match (self.line, other.line) {
                (Some(a), Some(b)) => match a.cmp(&b) {
                    Ordering::Equal => self.severity.cmp(&other.severity),
                    other => other,
                },
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => self.severity.cmp(&other.severity),
            },
            other => other,
        }
    }
}

impl PartialOrd for Finding {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
