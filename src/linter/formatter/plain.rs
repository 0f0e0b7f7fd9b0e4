//! Plain text formatter.
//!
//! This is the output a CI gate consumes, and its two shapes are stable:
//! a single success line, or an `Errors found:` header followed by one
//! `<file>: <message>` line per finding.

use crate::linter::lint::LintResult;

/// Format a lint result as plain text.
pub fn format(result: &LintResult) -> String {
    let mut output = String::new();

    if result.findings.is_empty() {
        output.push_str("All files and objects follow the conventions.\n");
        return output;
    }

    output.push_str("Errors found:\n");
    for finding in &result.findings {
        output.push_str(&format!(
            "{}: {}\n",
            finding.file_path.display(),
            finding.message
        ));
    }

    output
}
