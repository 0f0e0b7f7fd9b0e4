//! JSON formatter.

use crate::linter::lint::LintResult;
use serde::Serialize;

/// Format a lint result as JSON.
pub fn format(result: &LintResult) -> String {
    let output = JsonOutput::from(result);
    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

#[derive(Serialize)]
struct JsonOutput {
    findings: Vec<JsonFinding>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonFinding {
    code: String,
    severity: String,
    message: String,
    file_path: String,
    line: Option<u32>,
    expected: Option<String>,
    found: Option<String>,
}

#[derive(Serialize)]
struct JsonSummary {
    files_scanned: usize,
    documents_analyzed: usize,
    rules_run: usize,
    total_findings: usize,
    passed: bool,
}

impl From<&LintResult> for JsonOutput {
    fn from(result: &LintResult) -> Self {
        Self {
            findings: result.findings.iter().map(JsonFinding::from).collect(),
            summary: JsonSummary {
                files_scanned: result.summary.files_scanned,
                documents_analyzed: result.summary.documents_analyzed,
                rules_run: result.summary.rules_run,
                total_findings: result.findings.len(),
                passed: result.summary.passed,
            },
        }
    }
}

impl From<&crate::linter::types::Finding> for JsonFinding {
    fn from(f: &crate::linter::types::Finding) -> Self {
        Self {
            code: f.code.to_string(),
            severity: f.severity.to_string(),
            message: f.message.clone(),
            file_path: f.file_path.display().to_string(),
            line: f.line,
            expected: f.expected.clone(),
            found: f.found.clone(),
        }
    }
}
