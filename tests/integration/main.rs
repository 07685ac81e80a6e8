//! Integration tests for the intake CLI
//!
//! These tests drive the binary end to end in a temporary directory:
//! edit the draft → save → reset → load → prompt.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper function to create an intake command rooted in `dir`
fn intake(dir: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("intake"));
    cmd.current_dir(dir)
        .arg("--storage-dir")
        .arg(dir.join("store"));
    cmd
}

fn stored(dir: &std::path::Path) -> serde_json::Value {
    let raw = fs::read_to_string(dir.join("store/local-storage.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

// =============================================================================
// BASICS
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    intake(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("intake v"));
}

#[test]
fn test_help_mentions_lists() {
    let temp = TempDir::new().unwrap();
    intake(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("contribution"))
        .stdout(predicate::str::contains("contributor"));
}

// =============================================================================
// END-TO-END WORKFLOW
// =============================================================================

#[test]
fn test_e2e_save_reset_load() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    intake(dir)
        .args(["contribution", "add", "Filed prototype sketches"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added contribution 1"));

    intake(dir)
        .args(["contributor", "add", "--name", "Ada", "--expertise", "Mathematics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added contributor 1"));

    intake(dir)
        .arg("save")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 1 contribution(s) and 1 contributor(s)"));

    let saved: serde_json::Value =
        serde_json::from_str(stored(dir)["contributorAnalysis"].as_str().unwrap()).unwrap();
    assert_eq!(saved["contributions"][0]["description"], "Filed prototype sketches");
    assert_eq!(saved["contributors"][0]["name"], "Ada");
    assert_eq!(saved["contributors"][0]["contribution"], "");
    assert!(stored(dir).get("contributorAnalysis.savedAt").is_some());
    assert!(stored(dir).get("intake.draft.savedAt").is_none());

    intake(dir).arg("reset").assert().success();
    intake(dir)
        .args(["contribution", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(none)"));

    intake(dir).arg("load").assert().success();
    intake(dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Filed prototype sketches"))
        .stdout(predicate::str::contains("Last saved:"));
}

#[test]
fn test_remove_first_contributor_keeps_second() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    intake(dir)
        .args(["contributor", "add", "-n", "Ada", "-e", "Math", "-c", "Engine"])
        .assert()
        .success();
    intake(dir)
        .args(["contributor", "add", "-n", "Grace", "-e", "Compilers", "-c", "Toolchain"])
        .assert()
        .success();
    intake(dir)
        .args(["contributor", "remove", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed contributor 1"));

    let output = intake(dir)
        .args(["--json", "contributor", "list"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["contributors"],
        serde_json::json!([{"name": "Grace", "expertise": "Compilers", "contribution": "Toolchain"}])
    );
}

#[test]
fn test_edit_contributor_field() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();

    intake(dir).args(["contributor", "add"]).assert().success();
    intake(dir)
        .args(["contributor", "edit", "1", "expertise", "Optics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated contributor 1 expertise"));

    intake(dir)
        .args(["contributor", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expertise:    Optics"));
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn test_remove_out_of_range_fails() {
    let temp = TempDir::new().unwrap();
    intake(temp.path())
        .args(["contribution", "remove", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_zero_is_not_a_valid_number() {
    let temp = TempDir::new().unwrap();
    intake(temp.path())
        .args(["contribution", "edit", "0", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("numbers start at 1"));
}

#[test]
fn test_unknown_field_fails() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    intake(dir).args(["contributor", "add"]).assert().success();
    intake(dir)
        .args(["contributor", "edit", "1", "email", "a@b.c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown field"));
}

#[test]
fn test_corrupt_saved_snapshot_is_reported() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    fs::create_dir_all(dir.join("store")).unwrap();
    fs::write(
        dir.join("store/local-storage.json"),
        r#"{"contributorAnalysis": "{not json"}"#,
    )
    .unwrap();

    intake(dir)
        .arg("load")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed"));
}

// =============================================================================
// PROMPT
// =============================================================================

#[test]
fn test_prompt_uses_saved_analysis() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path();
    fs::write(
        dir.join("form.toml"),
        r#"
invention_stage = "Concept"
public_disclosure = true
patent_goals = ["Licensing"]
"#,
    )
    .unwrap();

    intake(dir)
        .args(["contribution", "add", "Filed prototype sketches"])
        .assert()
        .success();
    intake(dir).arg("save").assert().success();

    intake(dir)
        .args(["prompt", "--form", "form.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Invention Stage: Concept"))
        .stdout(predicate::str::contains("4. Public Disclosure: Yes"))
        .stdout(predicate::str::contains("- Contribution 1: Filed prototype sketches"));
}
