use std::fs;
use std::process::Command;

use serde_json::Value;

fn grin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_grin"))
}

#[test]
fn havel_hakimi_prints_process() {
    let output = grin().args(["havel-hakimi", "3", "3", "3", "3"]).output().expect("run grin");
    assert!(output.status.success());
    let summary: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(summary["graphic"], true);
    assert_eq!(summary["depth"], 3);
    assert_eq!(summary["residue"], 1);
    assert_eq!(summary["elimination_sequence"], serde_json::json!([3, 2, 1, 0]));
    assert_eq!(summary["process"][0], serde_json::json!([3, 3, 3, 3]));
}

#[test]
fn havel_hakimi_non_graphic_has_null_residue() {
    let output = grin()
        .args(["havel-hakimi", "5", "4", "3", "2", "1"])
        .output()
        .expect("run grin");
    assert!(output.status.success());
    let summary: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(summary["graphic"], false);
    assert!(summary["residue"].is_null());
    assert!(summary["elimination_sequence"].is_null());
}

#[test]
fn havel_hakimi_rejects_fractional_degrees() {
    let output = grin().args(["havel-hakimi", "2", "1.5"]).output().expect("run grin");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("non-integral"));
}

#[test]
fn havel_hakimi_rejects_negative_degrees() {
    let output = grin()
        .args(["havel-hakimi", "1", "-9223372036854775808"])
        .output()
        .expect("run grin");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("negative-degree"));
}

#[test]
fn generate_then_compute_invariants() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let graph_path = dir.path().join("petersen.json");
    let report_path = dir.path().join("out").join("report.json");

    let status = grin()
        .args(["generate", "--family", "petersen", "--out"])
        .arg(&graph_path)
        .status()
        .expect("run grin");
    assert!(status.success());

    let status = grin()
        .args(["invariants", "--method", "ilp", "--graph"])
        .arg(&graph_path)
        .arg("--out")
        .arg(&report_path)
        .status()
        .expect("run grin");
    assert!(status.success());

    let report: Value = serde_json::from_str(&fs::read_to_string(&report_path).expect("report")).expect("json");
    assert_eq!(report["invariants"]["order"], 10);
    assert_eq!(report["invariants"]["domination_number"], 3);
    assert_eq!(report["invariants"]["chromatic_number"], 3);
    assert_eq!(report["invariants"]["method"], "ilp");
    assert_eq!(report["provenance"]["method"], "ilp");
    assert_eq!(report["provenance"]["graph_hash"].as_str().map(str::len), Some(64));
}

#[test]
fn config_file_supplies_defaults() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let graph_path = dir.path().join("graph.json");
    let config_path = dir.path().join("config.yaml");
    fs::write(&graph_path, r#"{"nodes": [0, 1, 2], "edges": [[0, 1]]}"#).expect("write graph");
    fs::write(&config_path, "k: 2\n").expect("write config");

    let output = grin()
        .args(["invariants", "--graph"])
        .arg(&graph_path)
        .arg("--config")
        .arg(&config_path)
        .output()
        .expect("run grin");
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(report["invariants"]["k"], 2);
    assert!(report["invariants"]["total_domination_number"].is_null());
    assert!(report["invariants"]["connected_domination_number"].is_null());
}

#[test]
fn unknown_method_fails() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let graph_path = dir.path().join("graph.json");
    fs::write(&graph_path, r#"{"edges": [[0, 1]]}"#).expect("write graph");
    let output = grin()
        .args(["invariants", "--method", "simplex", "--graph"])
        .arg(&graph_path)
        .output()
        .expect("run grin");
    assert!(!output.status.success());
}
