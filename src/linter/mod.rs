//! Convention linter for Kubernetes manifest trees.
//!
//! Checks a directory tree of `.yml` manifests for two convention
//! families: RBAC naming (one human identity per file, filename and
//! object name agreeing) and kustomization completeness (every directory
//! aggregates exactly the resource files it contains).
//!
//! # Example
//!
//! ```rust,ignore
//! use convlint::linter::{ConvlintConfig, lint};
//! use std::path::Path;
//!
//! let config = ConvlintConfig::default();
//! let result = lint(Path::new("clusters/production/namespaces"), &config);
//!
//! for finding in &result.findings {
//!     println!("{}: {}", finding.file_path.display(), finding.message);
//! }
//! ```
//!
//! # Rules
//!
//! | Code   | Name                             | Description                                            |
//! |--------|----------------------------------|--------------------------------------------------------|
//! | CVL000 | yaml-parse-error                 | Reserved for unreadable or malformed YAML files        |
//! | CVL001 | rbac-filename-convention         | Role/RoleBinding files are named `name-lastname.yml`   |
//! | CVL002 | rbac-object-name-convention      | `metadata.name` is `name.lastname` and matches the file|
//! | CVL003 | kustomization-dangling-resource  | Declared resources exist on disk                       |
//! | CVL004 | kustomization-missing-resource   | Sibling `.yml` files are declared as resources         |

pub mod config;
pub mod formatter;
pub mod lint;
pub mod parser;
pub mod rules;
pub mod types;
pub mod walker;

// Re-export main types and functions
pub use config::ConvlintConfig;
pub use formatter::{OutputFormat, format_result, format_result_to_string};
pub use lint::{LintResult, LintSummary, lint};
pub use types::{Finding, RuleCategory, RuleCode, Severity};

/// The manifest tree a bare `convlint check` looks at.
pub const DEFAULT_MANIFEST_ROOT: &str = "clusters/production/namespaces";

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_lint_surface() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("carol-adams.yml"),
            "kind: Role\nmetadata:\n  name: carol.adams\n",
        )
        .unwrap();

        let result = lint(temp.path(), &ConvlintConfig::default());
        assert!(result.summary.passed);

        let rendered = format_result_to_string(&result, OutputFormat::Plain);
        assert_eq!(rendered, "All files and objects follow the conventions.\n");
    }
}
