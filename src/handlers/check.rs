//! Handler for the `check` command.

use crate::cli;
use crate::error::Result;
use crate::linter::{self, ConvlintConfig, OutputFormat};
use std::path::PathBuf;

/// Run the convention check and print the result.
///
/// Returns whether the tree passed, so the caller can map it to the exit
/// code.
pub fn handle_check(
    path: PathBuf,
    format: cli::OutputFormat,
    ignore: Option<Vec<String>>,
    no_fail: bool,
    config_path: Option<PathBuf>,
) -> Result<bool> {
    let mut config = match config_path {
        Some(p) => ConvlintConfig::load_from_file(&p)?,
        None => ConvlintConfig::load_from_default().unwrap_or_default(),
    };

    if let Some(codes) = ignore {
        config.ignore_rules.extend(codes);
    }
    if no_fail {
        config.no_fail = true;
    }

    log::info!("checking manifest tree at {}", path.display());
    let result = linter::lint(&path, &config);
    log::info!(
        "scanned {} files ({} documents), {} findings",
        result.summary.files_scanned,
        result.summary.documents_analyzed,
        result.findings.len()
    );

    let format = match format {
        cli::OutputFormat::Plain => OutputFormat::Plain,
        cli::OutputFormat::Json => OutputFormat::Json,
        cli::OutputFormat::Github => OutputFormat::GitHub,
    };
    print!("{}", linter::format_result_to_string(&result, format));

    Ok(result.summary.passed)
}
