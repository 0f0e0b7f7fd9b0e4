//! Rule system framework for convlint.
//!
//! Provides the infrastructure for defining and running convention rules:
//! - `Rule` trait for all rules
//! - `SimpleRule` for stateless checks
//! - `LintContext` carrying one file's parsed state

use crate::linter::parser::yaml::Document;
use crate::linter::types::{Finding, RuleCategory, RuleCode, Severity};
use serde::Serialize;
use serde_yaml::Value;
use std::path::Path;

// Rule modules
pub mod cvl001;
pub mod cvl002;
pub mod cvl003;
pub mod cvl004;

/// Exact basename of an aggregation manifest.
pub const KUSTOMIZATION_FILE: &str = "kustomization.yml";

/// Context for linting one manifest file.
#[derive(Debug, Clone)]
pub struct LintContext<'a> {
    /// The manifest file path as discovered under the root.
    pub path: &'a Path,
    /// The file's parsed multi-document stream (empty on parse failure).
    pub docs: &'a [Document],
    /// The single-document load of a `kustomization.yml`, when this file
    /// is one and it parsed.
    pub kustomization: Option<&'a Value>,
}

impl<'a> LintContext<'a> {
    pub fn new(path: &'a Path, docs: &'a [Document]) -> Self {
        Self {
            path,
            docs,
            kustomization: None,
        }
    }

    /// Attach the single-document load of a kustomization file.
    pub fn with_kustomization(mut self, value: &'a Value) -> Self {
        self.kustomization = Some(value);
        self
    }
}

/// A rule that can check manifest files.
pub trait Rule: Send + Sync {
    /// Get the rule code (e.g., "CVL001").
    fn code(&self) -> &RuleCode;

    /// Get the human-readable rule name (e.g., "rbac-filename-convention").
    fn name(&self) -> &str;

    /// Get the default severity.
    fn severity(&self) -> Severity;

    /// Get the rule category.
    fn category(&self) -> RuleCategory;

    /// Get a short description of what the rule enforces.
    fn description(&self) -> &str;

    /// Check one manifest file and return any findings.
    fn check(&self, context: &LintContext) -> Vec<Finding>;
}

/// Base implementation for a stateless rule.
pub struct SimpleRule<F>
where
    F: Fn(&LintContext) -> Vec<Finding> + Send + Sync,
{
    code: RuleCode,
    name: String,
    severity: Severity,
    category: RuleCategory,
    description: String,
    check_fn: F,
}

impl<F> SimpleRule<F>
where
    F: Fn(&LintContext) -> Vec<Finding> + Send + Sync,
{
    pub fn new(
        code: impl Into<RuleCode>,
        name: impl Into<String>,
        severity: Severity,
        category: RuleCategory,
        description: impl Into<String>,
        check_fn: F,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            severity,
            category,
            description: description.into(),
            check_fn,
        }
    }
}

impl<F> Rule for SimpleRule<F>
where
    F: Fn(&LintContext) -> Vec<Finding> + Send + Sync,
{
    fn code(&self) -> &RuleCode {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn category(&self) -> RuleCategory {
        self.category
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn check(&self, context: &LintContext) -> Vec<Finding> {
        (self.check_fn)(context)
    }
}

/// The manifest kinds subject to the naming rules.
pub(crate) fn is_rbac_kind(kind: &str) -> bool {
    matches!(kind, "Role" | "RoleBinding")
}

/// Basename of a manifest file with the `.yml` extension stripped.
pub(crate) fn manifest_stem(path: &Path) -> &str {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    name.strip_suffix(".yml").unwrap_or(name)
}

/// The object name a manifest file's stem implies: the hyphen becomes a dot.
pub(crate) fn expected_object_name(path: &Path) -> String {
    manifest_stem(path).replace('-', ".")
}

/// Get all rules, in execution order.
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(cvl001::rule()),
        Box::new(cvl002::rule()),
        Box::new(cvl003::rule()),
        Box::new(cvl004::rule()),
    ]
}

/// Get rule definitions for documentation.
pub fn rule_definitions() -> Vec<RuleDefinition> {
    all_rules()
        .iter()
        .map(|r| RuleDefinition {
            code: r.code().clone(),
            name: r.name().to_string(),
            severity: r.severity(),
            category: r.category(),
            description: r.description().to_string(),
        })
        .collect()
}

/// Rule definition for documentation/introspection.
#[derive(Debug, Clone, Serialize)]
pub struct RuleDefinition {
    pub code: RuleCode,
    pub name: String,
    pub severity: Severity,
    pub category: RuleCategory,
    pub description: String,
}
