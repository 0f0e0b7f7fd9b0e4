//! CVL002: rbac-object-name-convention
//!
//! A Role or RoleBinding's `metadata.name` must be the file stem with the
//! hyphen turned into a dot. The dot-form pattern admits names the stem
//! cannot produce (its segments may contain hyphens), so the string
//! equality against the derived name is required in addition to the
//! pattern match.

use crate::linter::parser::yaml::{document_kind, object_name};
use crate::linter::rules::{LintContext, Rule, SimpleRule, expected_object_name, is_rbac_kind};
use crate::linter::types::{Finding, RuleCategory, Severity};
use regex::Regex;
use std::sync::LazyLock;

const CODE: &str = "CVL002";
const NAME: &str = "rbac-object-name-convention";
const DESCRIPTION: &str =
    "Role and RoleBinding object names must be 'name.lastname', matching the filename.";

static OBJECT_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[^.]+\.[^.]+$").unwrap());

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
    let expected = expected_object_name(ctx.path);

    for doc in ctx.docs {
        if !is_rbac_kind(document_kind(&doc.value)) {
            continue;
        }

        let found = object_name(&doc.value);
        if !(OBJECT_NAME_RE.is_match(found) && found == expected) {
            let message = format!(
                "Object name does not match 'name.lastname' (expected: {}, found: {})",
                expected, found
            );
            findings.push(
                Finding::new(CODE, Severity::Error, message, ctx.path)
                    .with_line(doc.line)
                    .with_expectation(expected.clone(), found),
            );
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::parser::yaml::parse_documents;
    use std::path::Path;

    fn check_file(path: &str, yaml: &str) -> Vec<Finding> {
        let docs = parse_documents(yaml).unwrap();
        let ctx = LintContext::new(Path::new(path), &docs);
        check(&ctx)
    }

    #[test]
    fn test_conforming_name() {
        let yaml = "kind: Role\nmetadata:\n  name: alice.smith\n";
        assert!(check_file("team/alice-smith.yml", yaml).is_empty());
    }

    #[test]
    fn test_mismatching_name() {
        let yaml = "kind: RoleBinding\nmetadata:\n  name: bob.jones\n";
        let findings = check_file("team/alice-smith.yml", yaml);
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].message,
            "Object name does not match 'name.lastname' (expected: alice.smith, found: bob.jones)"
        );
        assert_eq!(findings[0].expected.as_deref(), Some("alice.smith"));
        assert_eq!(findings[0].found.as_deref(), Some("bob.jones"));
    }

    #[test]
    fn test_absent_name_reports_empty_found() {
        let yaml = "kind: Role\n";
        let findings = check_file("team/alice-smith.yml", yaml);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("found: )"));
    }

    #[test]
    fn test_equal_but_multi_dot_name_fails_pattern() {
        // Stem "a-b-c" derives "a.b.c", which the dot-form pattern rejects
        // even though the equality would hold.
        let yaml = "kind: Role\nmetadata:\n  name: a.b.c\n";
        let findings = check_file("team/a-b-c.yml", yaml);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_pattern_match_but_unequal_fails() {
        // "alice.smith" fits the pattern, but the underscore stem derives
        // "alice_smith", so equality fails.
        let yaml = "kind: Role\nmetadata:\n  name: alice.smith\n";
        let findings = check_file("team/alice_smith.yml", yaml);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].expected.as_deref(), Some("alice_smith"));
    }

    #[test]
    fn test_non_rbac_kind_skipped() {
        let yaml = "kind: ServiceAccount\nmetadata:\n  name: nonsense\n";
        assert!(check_file("team/alice-smith.yml", yaml).is_empty());
    }

    #[test]
    fn test_hyphenated_segments_need_equality() {
        // "al-ice.smith" matches the dot pattern; only equality rejects it.
        let yaml = "kind: Role\nmetadata:\n  name: al-ice.smith\n";
        let findings = check_file("team/alice-smith.yml", yaml);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].found.as_deref(), Some("al-ice.smith"));
    }
}
