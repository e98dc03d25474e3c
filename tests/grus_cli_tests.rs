//! Integration tests for the grus CLI
//!
//! Each test drives the built binary against a small tracking export
//! written to a temp directory.

use std::fs;
use std::path::PathBuf;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::tempdir;

fn grus() -> Command {
    cargo_bin_cmd!("grus")
}

/// Two migratory nodes ("e1" south, "e3" north), two cranes crossing.
const FIXTURE: &str = "\
event-id,timestamp,location-lat,location-long,tag-local-identifier,comments
e1,2021-05-01 06:00:00,52.00,10.00,T-1,1000
e2,2021-05-01 06:30:00,52.01,10.00,T-2,2000
e3,2021-05-02 06:00:00,52.30,10.00,T-1,4000
e4,2021-05-02 07:00:00,52.30,10.00,T-2,6000
";

fn write_fixture(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("events.csv");
    fs::write(&path, FIXTURE).unwrap();
    path
}

// ============================================================================
// Help, version, usage errors
// ============================================================================

#[test]
fn test_help_flag() {
    grus()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: grus"))
        .stdout(predicate::str::contains("summary"))
        .stdout(predicate::str::contains("shortest"))
        .stdout(predicate::str::contains("corridor"));
}

#[test]
fn test_version_flag() {
    grus()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("grus"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    grus()
        .args(["--format", "invalid", "summary"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_argument_json_usage_error() {
    grus()
        .args(["--format", "json", "summary", "--bogus-flag"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage\""));
}

#[test]
fn test_missing_data_flag_is_usage_error() {
    grus()
        .arg("summary")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--data"));
}

#[test]
fn test_bad_metric_exit_code_2() {
    let dir = tempdir().unwrap();
    let data = write_fixture(&dir);
    grus()
        .args(["--data", data.to_str().unwrap()])
        .args(["shortest", "e1", "e3", "--metric", "fuel"])
        .assert()
        .code(2);
}

// ============================================================================
// Data errors
// ============================================================================

#[test]
fn test_missing_data_file_exit_code_3() {
    grus()
        .args(["--data", "/nonexistent/events.csv", "summary"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("data file not found"));
}

#[test]
fn test_malformed_row_exit_code_3() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.csv");
    fs::write(
        &path,
        "event-id,timestamp,location-lat,location-long,tag-local-identifier,comments\n\
         e1,not-a-date,52.0,10.0,T-1,1000\n",
    )
    .unwrap();

    grus()
        .args(["--data", path.to_str().unwrap(), "summary"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid record"));
}

#[test]
fn test_unknown_node_json_envelope() {
    let dir = tempdir().unwrap();
    let data = write_fixture(&dir);
    grus()
        .args(["--format", "json", "--data", data.to_str().unwrap()])
        .args(["reach", "e1", "bogus"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"node_not_found\""));
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_summary_human() {
    let dir = tempdir().unwrap();
    let data = write_fixture(&dir);
    grus()
        .args(["--data", data.to_str().unwrap(), "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("events:      4"))
        .stdout(predicate::str::contains("nodes:       2"))
        .stdout(predicate::str::contains("transitions: 1"));
}

#[test]
fn test_summary_json() {
    let dir = tempdir().unwrap();
    let data = write_fixture(&dir);
    let output = grus()
        .args(["--format", "json", "--data", data.to_str().unwrap()])
        .arg("summary")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["events"], 4);
    assert_eq!(value["nodes"], 2);
    assert_eq!(value["transitions"], 1);
}

#[test]
fn test_reach_both_directions() {
    let dir = tempdir().unwrap();
    let data = write_fixture(&dir);

    grus()
        .args(["--data", data.to_str().unwrap(), "reach", "e1", "e3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reachable in 1 hop(s)"));

    // migration is one-way in the fixture
    grus()
        .args(["--data", data.to_str().unwrap(), "reach", "e3", "e1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unreachable"));
}

#[test]
fn test_shortest_json_has_weight_and_path() {
    let dir = tempdir().unwrap();
    let data = write_fixture(&dir);
    let output = grus()
        .args(["--format", "json", "--data", data.to_str().unwrap()])
        .args(["shortest", "e1", "e3", "--metric", "water"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["reachable"], true);
    assert_eq!(value["metric"], "water");
    // destination node average: (4 + 6) / 2 km
    assert!((value["total_weight"].as_f64().unwrap() - 5.0).abs() < 1e-9);
    assert_eq!(value["path"].as_array().unwrap().len(), 2);
}

#[test]
fn test_corridor_order_chain_components() {
    let dir = tempdir().unwrap();
    let data = write_fixture(&dir);
    let base = ["--data", data.to_str().unwrap()];

    grus()
        .args(base)
        .args(["corridor", "e1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 node(s)"));

    grus()
        .args(base)
        .arg("order")
        .assert()
        .success()
        .stdout(predicate::str::contains("migration order"));

    grus()
        .args(base)
        .arg("chain")
        .assert()
        .success()
        .stdout(predicate::str::contains("longest chain: 2 node(s)"));

    grus()
        .args(base)
        .arg("components")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 component(s)"));
}
