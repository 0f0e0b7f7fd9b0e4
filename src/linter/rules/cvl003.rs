//! CVL003: kustomization-dangling-resource
//!
//! Every resource a `kustomization.yml` declares must resolve to an
//! existing path in its directory.

use crate::linter::parser::yaml::declared_resources;
use crate::linter::rules::{LintContext, Rule, SimpleRule};
use crate::linter::types::{Finding, RuleCategory, Severity};
use std::path::Path;

const CODE: &str = "CVL003";
const NAME: &str = "kustomization-dangling-resource";
const DESCRIPTION: &str = "Declared kustomization resources must exist on disk.";

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
    let mut findings = Vec::new();

    for res in declared_resources(kustomization) {
        if !dir.join(&res).exists() {
            findings.push(Finding::new(
                CODE,
                Severity::Error,
                format!("Resource '{}' not found in directory.", res),
                ctx.path,
            ));
        }
    }

    findings
}
