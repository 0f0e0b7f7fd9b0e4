use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::linter::DEFAULT_MANIFEST_ROOT;

#[derive(Parser)]
#[command(name = "convlint")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check Kubernetes manifest trees against RBAC naming and kustomization conventions")]
#[command(
    long_about = "A CLI tool that checks a directory tree of Kubernetes YAML manifests: Role and RoleBinding files must follow the name-lastname.yml / name.lastname convention, and every kustomization.yml must declare exactly the resource files present in its directory."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a manifest tree against the conventions
    Check {
        /// Root of the manifest tree to check
        #[arg(value_name = "ROOT", env = "CONVLINT_ROOT", default_value = DEFAULT_MANIFEST_ROOT)]
        path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "plain")]
        format: OutputFormat,

        /// Rule codes to skip (e.g. CVL003)
        #[arg(long, value_delimiter = ',')]
        ignore: Option<Vec<String>>,

        /// Report findings but always exit zero
        #[arg(long)]
        no_fail: bool,
    },

    /// List the rules this linter enforces
    Rules {
        /// Output the rule table as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Output format for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text (the CI gate contract)
    Plain,
    /// Machine-readable JSON
    Json,
    /// GitHub Actions annotations
    Github,
}

impl Cli {
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
