//! CVL004: kustomization-missing-resource
//!
//! Every sibling `.yml` entry next to a `kustomization.yml` (other than
//! the kustomization itself) must appear in its `resources` list. The
//! scan goes by entry name alone; an entry is a candidate whenever its
//! name ends in `.yml`, whatever its file type.

use crate::linter::parser::yaml::declared_resources;
use crate::linter::rules::{KUSTOMIZATION_FILE, LintContext, Rule, SimpleRule};
use crate::linter::types::{Finding, RuleCategory, Severity};
use std::path::Path;

const CODE: &str = "CVL004";
const NAME: &str = "kustomization-missing-resource";
const DESCRIPTION: &str =
    "Sibling .yml files must be declared in the directory's kustomization.yml.";

pub fn rule() -> impl Rule {
    SimpleRule::new(
        CODE,
        NAME,
        Severity::Error,
        RuleCategory::Aggregation,
        DESCRIPTION,
        check,
    )
}

fn check(ctx: &LintContext) -> Vec<Finding> {
    let Some(kustomization) = ctx.kustomization else {
        return Vec::new();
    };

    let dir = ctx.path.parent().unwrap_or_else(|| Path::new(""));
    let resources = declared_resources(kustomization);
    let mut findings = Vec::new();

    for neighbor in sibling_entries(dir) {
        if neighbor != KUSTOMIZATION_FILE
            && neighbor.ends_with(".yml")
            && !resources.contains(&neighbor)
        {
            findings.push(Finding::new(
                CODE,
                Severity::Error,
                format!(
                    "'{}' missing resource declaration in kustomization.yml",
                    neighbor
                ),
                ctx.path,
            ));
        }
    }

    findings
}

/// Names of the immediate children of `dir`, sorted for stable output.
fn sibling_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter_map(|e| e.file_name().to_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}
