//! End-to-end tests for the `convlint check` CI gate.
//!
//! Each test builds a manifest tree in a temp directory and drives the
//! binary the way a pipeline would, asserting on output and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SUCCESS_LINE: &str = "All files and objects follow the conventions.\n";

fn write_manifest(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn convlint(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("convlint").unwrap();
    cmd.arg("check").arg(root);
    cmd
}

#[test]
fn conforming_role_passes() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        temp.path(),
        "team-a/alice-smith.yml",
        "kind: Role\nmetadata:\n  name: alice.smith\nrules: []\n",
    );

    convlint(temp.path())
        .assert()
        .success()
        .stdout(SUCCESS_LINE);
}

#[test]
fn underscore_filename_fails() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        temp.path(),
        "team-a/alice_smith.yml",
        "kind: Role\nmetadata:\n  name: alice.smith\n",
    );

    // The underscore breaks the filename pattern, and the name derived
    // from the stem becomes "alice_smith", so the object-name equality
    // fails as well.
    convlint(temp.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::starts_with("Errors found:\n"))
        .stdout(predicate::str::contains(
            "Filename does not match 'name-lastname.yml'",
        ))
        .stdout(predicate::str::contains(
            "(expected: alice_smith, found: alice.smith)",
        ));
}

#[test]
fn mismatching_object_name_fails() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        temp.path(),
        "team-a/alice-smith.yml",
        "kind: RoleBinding\nmetadata:\n  name: bob.jones\n",
    );

    let assert = convlint(temp.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "Object name does not match 'name.lastname' (expected: alice.smith, found: bob.jones)",
        ));

    // Filename is fine, so the object-name mismatch is the only finding.
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn undeclared_sibling_fails() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), "ns/a.yml", "kind: ConfigMap\nmetadata:\n  name: a\n");
    write_manifest(temp.path(), "ns/b.yml", "kind: ConfigMap\nmetadata:\n  name: b\n");
    write_manifest(temp.path(), "ns/kustomization.yml", "resources:\n  - a.yml\n");

    let assert = convlint(temp.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "'b.yml' missing resource declaration in kustomization.yml",
        ));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn dangling_resource_fails() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        temp.path(),
        "ns/kustomization.yml",
        "resources:\n  - missing.yml\n",
    );

    let assert = convlint(temp.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "Resource 'missing.yml' not found in directory.",
        ));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn empty_tree_passes() {
    let temp = TempDir::new().unwrap();

    convlint(temp.path())
        .assert()
        .success()
        .stdout(SUCCESS_LINE);
}

#[test]
fn missing_root_passes() {
    let temp = TempDir::new().unwrap();

    convlint(&temp.path().join("never-created"))
        .assert()
        .success()
        .stdout(SUCCESS_LINE);
}

#[test]
fn malformed_file_does_not_suppress_other_files() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), "a/broken.yml", "kind: Role\n  oops: [\n");
    write_manifest(
        temp.path(),
        "b/carol-adams.yml",
        "kind: Role\nmetadata:\n  name: someone.else\n",
    );

    convlint(temp.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("YAML parse error"))
        .stdout(predicate::str::contains(
            "(expected: carol.adams, found: someone.else)",
        ));
}

#[test]
fn malformed_kustomization_reports_both_parse_passes() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), "ns/kustomization.yml", "resources: [broken\n");

    let assert = convlint(temp.path()).assert().failure().code(1);
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    // One finding from the multi-document pass, one from the
    // single-document resource-check pass.
    let parse_lines = stdout
        .lines()
        .filter(|l| l.contains("YAML parse error"))
        .count();
    assert_eq!(parse_lines, 2);
}

#[test]
fn multi_document_rbac_file_checks_every_document() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        temp.path(),
        "team/dana-miles.yml",
        "kind: Role\nmetadata:\n  name: dana.miles\n---\nkind: RoleBinding\nmetadata:\n  name: wrong.name\n",
    );

    let assert = convlint(temp.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "(expected: dana.miles, found: wrong.name)",
        ));

    // The conforming Role document adds no findings.
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn output_is_idempotent() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        temp.path(),
        "ns/eve_adams.yml",
        "kind: Role\nmetadata:\n  name: eve.adams\n",
    );
    write_manifest(
        temp.path(),
        "ns/kustomization.yml",
        "resources:\n  - ghost.yml\n",
    );

    let first = convlint(temp.path()).output().unwrap();
    let second = convlint(temp.path()).output().unwrap();
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), Some(1));
    assert_eq!(second.status.code(), Some(1));
}

#[test]
fn findings_are_ordered_by_file() {
    let temp = TempDir::new().unwrap();
    write_manifest(temp.path(), "zz/bad_z.yml", "kind: Role\nmetadata:\n  name: z\n");
    write_manifest(temp.path(), "aa/bad_a.yml", "kind: Role\nmetadata:\n  name: a\n");

    let assert = convlint(temp.path()).assert().failure();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let pos_a = stdout.find("bad_a.yml").unwrap();
    let pos_z = stdout.find("bad_z.yml").unwrap();
    assert!(pos_a < pos_z);
}

#[test]
fn no_fail_flag_keeps_exit_zero() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        temp.path(),
        "team/frank_moor.yml",
        "kind: Role\nmetadata:\n  name: frank.moor\n",
    );

    convlint(temp.path())
        .arg("--no-fail")
        .assert()
        .success()
        .stdout(predicate::str::contains("Errors found:"));
}

#[test]
fn ignore_flag_skips_rules() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        temp.path(),
        "ns/kustomization.yml",
        "resources:\n  - ghost.yml\n",
    );

    convlint(temp.path())
        .args(["--ignore", "CVL003,CVL004"])
        .assert()
        .success()
        .stdout(SUCCESS_LINE);
}

#[test]
fn json_format_reports_findings() {
    let temp = TempDir::new().unwrap();
    write_manifest(
        temp.path(),
        "team/grace-wu.yml",
        "kind: RoleBinding\nmetadata:\n  name: not.grace\n",
    );

    let assert = convlint(temp.path())
        .args(["--format", "json"])
        .assert()
        .failure()
        .code(1);

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["findings"][0]["code"], "CVL002");
    assert_eq!(value["findings"][0]["expected"], "grace.wu");
    assert_eq!(value["summary"]["passed"], false);
}

#[test]
fn rules_subcommand_lists_rule_set() {
    Command::cargo_bin("convlint")
        .unwrap()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("CVL001"))
        .stdout(predicate::str::contains("rbac-filename-convention"))
        .stdout(predicate::str::contains("kustomization-missing-resource"));
}

#[test]
fn fatal_config_error_exits_two() {
    let temp = TempDir::new().unwrap();

    convlint(temp.path())
        .args(["--config", "no-such-config.yml"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("configuration error"));
}
