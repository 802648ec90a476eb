//! End-to-end CLI tests.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn textfix() -> Command {
    Command::cargo_bin("textfix").expect("textfix binary")
}

fn write_file(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_fix_rewrites_files_in_place() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_file(
        temp.path(),
        "page.tsx",
        "\u{feff}<p>It&apos;s &quot;ready&quot; &amp; done.</p>\n",
    );

    textfix()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("fixed: {path}")))
        .stdout(predicate::str::contains("all 1 files processed"));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "<p>It's \"ready\" & done.</p>\r\n"
    );
}

#[test]
fn test_missing_file_reports_error_and_exit_code() {
    let temp = tempfile::tempdir().expect("tempdir");
    let first = write_file(temp.path(), "a.tsx", "a&amp;b\n");
    let missing = temp.path().join("missing.tsx");
    let third = write_file(temp.path(), "c.tsx", "c&quot;d\n");

    textfix()
        .arg(&first)
        .arg(&missing)
        .arg(&third)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(format!("fixed: {first}")))
        .stdout(predicate::str::contains(format!(
            "error fixing {}",
            missing.display()
        )))
        .stdout(predicate::str::contains(format!("fixed: {third}")))
        .stdout(predicate::str::contains(
            "all 3 files processed (2 fixed, 1 failed",
        ));

    assert_eq!(fs::read_to_string(&first).unwrap(), "a&b\r\n");
    assert_eq!(fs::read_to_string(&third).unwrap(), "c\"d\r\n");
}

#[test]
fn test_dry_run_leaves_files_untouched() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_file(temp.path(), "page.tsx", "a &amp; b\n");

    textfix()
        .arg("--dry-run")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("(dry-run)"))
        .stdout(predicate::str::contains("diff --git"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "a &amp; b\n");
}

#[test]
fn test_manifest_supplies_paths() {
    let temp = tempfile::tempdir().expect("tempdir");
    let a = write_file(temp.path(), "a.tsx", "x&apos;y\n");
    let b = write_file(temp.path(), "b.tsx", "p&quot;q\n");
    let manifest = write_file(
        temp.path(),
        "manifest.txt",
        &format!("# files to fix\n{a}\n\n{b}\n"),
    );

    textfix()
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .success()
        .stdout(predicate::str::contains("all 2 files processed"));

    assert_eq!(fs::read_to_string(&a).unwrap(), "x'y\r\n");
    assert_eq!(fs::read_to_string(&b).unwrap(), "p\"q\r\n");
}

#[test]
fn test_config_file_supplies_paths() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_file(temp.path(), "a.tsx", "m&amp;n\n");
    write_file(temp.path(), "textfix.toml", "paths = [\"a.tsx\"]\n");

    textfix()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("fixed: a.tsx"));

    assert_eq!(
        fs::read_to_string(temp.path().join("a.tsx")).unwrap(),
        "m&n\r\n"
    );
}

#[test]
fn test_explicit_config_flag() {
    let temp = tempfile::tempdir().expect("tempdir");
    let target = write_file(temp.path(), "a.tsx", "m&amp;n\n");
    let config = write_file(
        temp.path(),
        "custom.toml",
        &format!("paths = [\"{target}\"]\n"),
    );

    textfix()
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("all 1 files processed"));
}

#[test]
fn test_json_format_emits_report() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_file(temp.path(), "a.tsx", "m&amp;n\n");

    let assert = textfix()
        .arg("--format")
        .arg("json")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"schema\": \"textfix.report.v1\""))
        .stdout(predicate::str::contains("\"status\": \"fixed\""));

    let report: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid report json");
    assert_eq!(report["summary"]["total"], 1);
    assert_eq!(report["summary"]["fixed"], 1);
}

#[test]
fn test_report_json_artifact_is_written() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = write_file(temp.path(), "a.tsx", "m&amp;n\n");
    let report_path = temp.path().join("report.json");

    textfix()
        .arg("--report-json")
        .arg(&report_path)
        .arg(&path)
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["schema"], "textfix.report.v1");
    assert_eq!(report["summary"]["files_changed"], 1);
}

#[test]
fn test_no_paths_is_an_error() {
    let temp = tempfile::tempdir().expect("tempdir");

    textfix().current_dir(temp.path()).assert().code(1);
}

#[test]
fn test_invalid_config_is_an_error() {
    let temp = tempfile::tempdir().expect("tempdir");
    write_file(temp.path(), "textfix.toml", "paths = [");

    textfix().current_dir(temp.path()).assert().code(1);
}

#[test]
fn test_invalid_format_value() {
    textfix()
        .arg("--format")
        .arg("yaml")
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("invalid").or(predicate::str::contains("possible values")),
        );
}

#[test]
fn test_help_flag() {
    textfix()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("textfix"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--manifest"));
}

#[test]
fn test_version_flag() {
    textfix()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("textfix"));
}
