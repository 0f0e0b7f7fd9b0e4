//! # Convlint
//!
//! A Rust-based command-line application that checks a directory tree of
//! Kubernetes YAML manifests against the conventions of a one-identity-
//! per-file RBAC layout:
//!
//! - **RBAC naming**: every `Role`/`RoleBinding` manifest is named
//!   `name-lastname.yml` and its `metadata.name` is `name.lastname`
//! - **Kustomization completeness**: every `kustomization.yml` declares
//!   exactly the `.yml` resource files present in its directory
//! - **CI gate**: exit code 0 when the tree is clean, 1 when findings
//!   were reported
//!
//! ## Example
//!
//! ```rust,no_run
//! use convlint::linter::{ConvlintConfig, lint};
//! use std::path::Path;
//!
//! let config = ConvlintConfig::default();
//! let result = lint(Path::new("clusters/production/namespaces"), &config);
//! assert!(result.summary.passed);
//! ```

pub mod cli;
pub mod error;
pub mod handlers;
pub mod linter;

// Re-export commonly used types and functions
pub use error::{ConvlintError, Result};
pub use linter::{ConvlintConfig, Finding, LintResult, lint};

use cli::{Cli, Commands};

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a parsed command line.
///
/// Returns whether the check passed; the binary maps `false` to exit
/// code 1.
pub fn run_command(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Check {
            path,
            format,
            ignore,
            no_fail,
        } => handlers::handle_check(path, format, ignore, no_fail, cli.config),
        Commands::Rules { json } => {
            handlers::handle_rules(json)?;
            Ok(true)
        }
    }
}
