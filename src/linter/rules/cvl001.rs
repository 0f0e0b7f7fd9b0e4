//! CVL001: rbac-filename-convention
//!
//! Role and RoleBinding manifests must live in a file named
//! `name-lastname.yml`: two non-empty segments joined by a hyphen,
//! neither containing an underscore or a slash.

use crate::linter::parser::yaml::document_kind;
use crate::linter::rules::{LintContext, Rule, SimpleRule, is_rbac_kind, manifest_stem};
use crate::linter::types::{Finding, RuleCategory, Severity};
use regex::Regex;
use std::sync::LazyLock;

const CODE: &str = "CVL001";
const NAME: &str = "rbac-filename-convention";
const DESCRIPTION: &str = "Role and RoleBinding manifests must be named 'name-lastname.yml'.";

static FILENAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^_/]+-[^_/]+$").unwrap());

pub fn rule() -> impl Rule {
    SimpleRule::new(
        CODE,
        NAME,
        Severity::Error,
        RuleCategory::Naming,
        DESCRIPTION,
        check,
    )
}

fn check(ctx: &LintContext) -> Vec<Finding> {
    let mut findings = Vec::new();
    let stem = manifest_stem(ctx.path);

    // The check fires once per RBAC document, so a multi-document file
    // repeats the finding for each object it holds.
    for doc in ctx.docs {
        if !is_rbac_kind(document_kind(&doc.value)) {
            continue;
        }

        if !FILENAME_RE.is_match(stem) {
            findings.push(
                Finding::new(
                    CODE,
                    Severity::Error,
                    "Filename does not match 'name-lastname.yml'",
                    ctx.path,
                )
                .with_line(doc.line),
            );
        }
    }

    findings
}
