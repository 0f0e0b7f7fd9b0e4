//! Main linting orchestration for convlint.
//!
//! Ties together the walker, the parser and the rules, and owns the
//! ordering and filtering of findings.

use crate::linter::config::ConvlintConfig;
use crate::linter::parser::yaml;
use crate::linter::rules::{self, KUSTOMIZATION_FILE, LintContext, Rule};
use crate::linter::types::{Finding, Severity};
use crate::linter::walker;

use std::path::Path;

/// Result of checking a manifest tree.
#[derive(Debug, Clone)]
pub struct LintResult {
    /// All findings, in reporting order.
    pub findings: Vec<Finding>,
    /// Summary of the lint run.
    pub summary: LintSummary,
}

/// Summary of a lint run.
#[derive(Debug, Clone)]
pub struct LintSummary {
    /// Number of manifest files scanned.
    pub files_scanned: usize,
    /// Number of YAML documents analyzed.
    pub documents_analyzed: usize,
    /// Number of rules run.
    pub rules_run: usize,
    /// Whether the check passed (no findings above threshold).
    pub passed: bool,
}

impl LintResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self {
            findings: Vec::new(),
            summary: LintSummary {
                files_scanned: 0,
                documents_analyzed: 0,
                rules_run: 0,
                passed: true,
            },
        }
    }

    /// Check if there are any findings.
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Get the maximum severity in the results.
    pub fn max_severity(&self) -> Option<Severity> {
        self.findings.iter().map(|f| f.severity).max()
    }

    /// Check if the results should cause a non-zero exit.
    pub fn should_fail(&self, config: &ConvlintConfig) -> bool {
        if config.no_fail {
            return false;
        }

        if let Some(max) = self.max_severity() {
            max >= config.failure_threshold
        } else {
            false
        }
    }

    /// Filter findings by severity threshold.
    pub fn filter_by_threshold(&mut self, threshold: Severity) {
        self.findings.retain(|f| f.severity >= threshold);
    }

    /// Sort findings by file path and line number.
    ///
    /// The sort is stable, so findings of one file that share a position
    /// keep the order the rules produced them in.
    pub fn sort(&mut self) {
        self.findings.sort();
    }
}

impl Default for LintResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Check every `.yml` manifest under `root` against the conventions.
pub fn lint(root: &Path, config: &ConvlintConfig) -> LintResult {
    let mut result = LintResult::new();
    let rules = rules::all_rules();

    result.summary.rules_run = rules
        .iter()
        .filter(|r| !config.is_rule_ignored(r.code()))
        .count();

    for path in walker::manifest_files(root) {
        if config.should_ignore_path(&path) {
            log::debug!("ignoring {}", path.display());
            continue;
        }
        lint_manifest(&path, &rules, config, &mut result);
    }

    result.findings.retain(|f| !config.is_rule_ignored(&f.code));
    result.filter_by_threshold(config.failure_threshold);
    result.sort();
    result.summary.passed = !result.should_fail(config);

    result
}

/// Check a single manifest file, appending findings to `result`.
fn lint_manifest(
    path: &Path,
    rules: &[Box<dyn Rule>],
    config: &ConvlintConfig,
    result: &mut LintResult,
) {
    result.summary.files_scanned += 1;

    let docs = match yaml::load_documents(path) {
        Ok(docs) => docs,
        Err(err) => {
            // Parse failures suppress the per-document rules for this
            // file but never abort the run.
            result.findings.push(Finding::parse_error(path, err.to_string()));
            Vec::new()
        }
    };
    result.summary.documents_analyzed += docs.len();

    // The resource checks work from a fresh single-document load of the
    // kustomization, independent of the multi-document pass above. A
    // malformed kustomization.yml therefore reports once per pass, and a
    // multi-document one fails only here.
    let kustomization = if path.file_name().and_then(|n| n.to_str()) == Some(KUSTOMIZATION_FILE) {
        match yaml::load_single_document(path) {
            Ok(value) => Some(value),
            Err(err) => {
                result.findings.push(Finding::parse_error(path, err.to_string()));
                None
            }
        }
    } else {
        None
    };

    let mut ctx = LintContext::new(path, &docs);
    if let Some(value) = kustomization.as_ref() {
        ctx = ctx.with_kustomization(value);
    }

    for rule in rules {
        if config.is_rule_ignored(rule.code()) {
            continue;
        }
        result.findings.extend(rule.check(&ctx));
    }
}
