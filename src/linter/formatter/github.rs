//! GitHub Actions output formatter.
//!
//! Produces output in GitHub Actions workflow command format:
//! ::error file={name},line={line},title={code}::{message}

use crate::linter::lint::LintResult;
use crate::linter::types::Severity;

/// Format a lint result for GitHub Actions.
pub fn format(result: &LintResult) -> String {
    let mut output = String::new();

    for finding in &result.findings {
        let level = match finding.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "notice",
        };

        output.push_str(&format!(
            "::{} file={},line={},title={}::{}\n",
            level,
            finding.file_path.display(),
            finding.line.unwrap_or(1),
            finding.code,
            escape_github(&finding.message)
        ));
    }

    output
}

/// Escape special characters for GitHub Actions.
fn escape_github(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
