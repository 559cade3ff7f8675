//! CLI integration tests.

use std::fs;
use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

const OPS_REQUEST: &str = r#"{
    "F": ["Ops"],
    "R": ["Manager", "Officer"],
    "W": {"Ops": 26},
    "C": 6.5,
    "N_current": {"Ops|Manager": 2, "Ops|Officer": 5},
    "alpha": {"Manager": 0.5},
    "penalty": {"Manager": 3, "Officer": 1}
}"#;

/// Command with `HOME` pointed at an empty directory so no user config leaks in.
fn rightsize(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("rightsize");
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is one JSON document")
}

#[test]
fn test_help() {
    let home = tempfile::tempdir().unwrap();
    rightsize(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("optimize"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version() {
    let home = tempfile::tempdir().unwrap();
    rightsize(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rightsize"));
}

#[test]
fn test_optimize_json_prints_ok_envelope() {
    let home = tempfile::tempdir().unwrap();
    let request = write_file(&home, "request.json", OPS_REQUEST);

    let output = rightsize(&home)
        .args(["--json", "optimize", "--request"])
        .arg(&request)
        .output()
        .unwrap();

    assert!(output.status.success());
    let body = stdout_json(&output);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["rows"][0]["Role"], "Manager");
    assert_eq!(body["rows"][0]["Optimal"], 2);
    assert_eq!(body["rows"][1]["Optimal"], 2);
}

#[test]
fn test_optimize_reads_stdin() {
    let home = tempfile::tempdir().unwrap();

    let output = rightsize(&home)
        .args(["--json", "optimize", "-r", "-"])
        .write_stdin(OPS_REQUEST)
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["status"], "ok");
}

#[test]
fn test_optimize_human_output_lists_roles() {
    let home = tempfile::tempdir().unwrap();
    let request = write_file(&home, "request.json", OPS_REQUEST);

    rightsize(&home)
        .args(["--color", "never", "optimize", "--request"])
        .arg(&request)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ops"))
        .stdout(predicate::str::contains("Manager"))
        .stdout(predicate::str::contains("Officer"))
        .stdout(predicate::str::contains("4 of 7 kept"));
}

#[test]
fn test_optimize_invalid_request_exits_non_zero() {
    let home = tempfile::tempdir().unwrap();
    let request = write_file(
        &home,
        "request.json",
        r#"{"F":[],"R":["Manager"],"W":{},"C":6.5,"N_current":{}}"#,
    );

    let output = rightsize(&home)
        .args(["--json", "optimize", "--request"])
        .arg(&request)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let body = stdout_json(&output);
    assert_eq!(body["status"], "error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("function list cannot be empty"));
}

#[test]
fn test_optimize_unknown_backend_reports_unavailable() {
    let home = tempfile::tempdir().unwrap();
    let request = write_file(&home, "request.json", OPS_REQUEST);
    let config = write_file(&home, "config.toml", "[solver]\nbackend = \"gurobi\"\n");

    let output = rightsize(&home)
        .args(["--json", "optimize", "--request"])
        .arg(&request)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let body = stdout_json(&output);
    assert_eq!(body["status"], "error");
    assert!(body["message"].as_str().unwrap().contains("gurobi"));
}

#[test]
fn test_optimize_uses_policy_roles_from_config() {
    let home = tempfile::tempdir().unwrap();
    let request = write_file(
        &home,
        "request.json",
        r#"{"F":["Ops"],"W":{"Ops":10},"C":6.5,"N_current":{"Ops|Officer":3}}"#,
    );
    let config = write_file(&home, "config.toml", "[policy]\nroles = [\"Officer\"]\n");

    let output = rightsize(&home)
        .args(["--json", "optimize", "-r"])
        .arg(&request)
        .args(["-c"])
        .arg(&config)
        .output()
        .unwrap();

    assert!(output.status.success());
    let body = stdout_json(&output);
    assert_eq!(body["rows"][0]["Role"], "Officer");
    assert_eq!(body["rows"][0]["Current"], 3);
}

#[test]
fn test_optimize_missing_request_file_fails() {
    let home = tempfile::tempdir().unwrap();

    rightsize(&home)
        .args(["optimize", "--request", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_config_init_then_validate() {
    let home = tempfile::tempdir().unwrap();
    let path = home.path().join("conf").join("config.toml");

    rightsize(&home)
        .args(["config", "init"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));
    assert!(path.exists());

    rightsize(&home)
        .args(["config", "validate", "-c"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file is valid"));
}

#[test]
fn test_config_validate_rejects_bad_share() {
    let home = tempfile::tempdir().unwrap();
    let config = write_file(&home, "config.toml", "[policy]\nalpha = { Manager = 2 }\n");

    rightsize(&home)
        .args(["config", "validate", "-c"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("policy.alpha"));
}

#[test]
fn test_config_show_without_file_uses_defaults() {
    let home = tempfile::tempdir().unwrap();

    rightsize(&home)
        .args(["--color", "never", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("highs"))
        .stdout(predicate::str::contains("fixed"));
}
