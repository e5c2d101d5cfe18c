//! CLI diff integration tests
//!
//! These tests run the built binary against snapshot files in a scratch
//! directory and check stdout, stderr and exit status.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::TempDir;

fn write_snapshot(dir: &TempDir, name: &str, doc: &Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_vec_pretty(doc).unwrap()).unwrap();
    path
}

fn before_doc() -> Value {
    json!({
        "id": 1,
        "meta": {
            "title": "Title",
            "startTime": "2016-04-20T10:00:00Z",
            "endTime": "2016-04-20T16:00:00Z"
        },
        "candidates": [
            {"id": 10, "candidateName": "C1", "extraTime": 0},
            {"id": 11, "candidateName": "C2", "extraTime": 10},
            {"id": 12, "candidateName": "C3", "extraTime": 20}
        ]
    })
}

fn after_doc() -> Value {
    json!({
        "id": 1,
        "meta": {
            "title": "Title",
            "startTime": "2016-04-20T10:00:00Z",
            "endTime": "2016-12-01T16:00:00Z"
        },
        "candidates": [
            {"id": 10, "candidateName": "C1", "extraTime": 0},
            {"id": 12, "candidateName": "C3", "extraTime": 30},
            {"id": 13, "candidateName": "C4", "extraTime": 0}
        ]
    })
}

fn run(dir: &TempDir, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_examdiff");
    Command::new(cli_bin)
        .current_dir(dir.path())
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn setup(dir: &TempDir) -> (String, String) {
    let before = write_snapshot(dir, "before.json", &before_doc());
    let after = write_snapshot(dir, "after.json", &after_doc());
    (
        before.to_str().unwrap().to_string(),
        after.to_str().unwrap().to_string(),
    )
}

#[test]
fn test_cli_diff_prints_json_report() {
    let temp_dir = TempDir::new().unwrap();
    let (before, after) = setup(&temp_dir);

    let output = run(&temp_dir, &["diff", "--before", &before, "--after", &after]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        report,
        json!({
            "meta": [{
                "field": "endTime",
                "before": "2016-04-20T18:00:00+02:00",
                "after": "2016-12-01T17:00:00+01:00"
            }],
            "candidates": {
                "edited": [{"id": 12}],
                "added": [{"id": 13}],
                "removed": [{"id": 11}]
            }
        })
    );
}

#[test]
fn test_cli_diff_timezone_flag_overrides_default() {
    let temp_dir = TempDir::new().unwrap();
    let (before, after) = setup(&temp_dir);

    let output = run(
        &temp_dir,
        &["diff", "--before", &before, "--after", &after, "--timezone", "UTC"],
    );
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["meta"][0]["before"], "2016-04-20T16:00:00UTC");
}

#[test]
fn test_cli_diff_reads_config_from_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    let (before, after) = setup(&temp_dir);
    fs::write(
        temp_dir.path().join("examdiff.toml"),
        "[display]\ntimezone = \"America/New_York\"\n",
    )
    .unwrap();

    let output = run(&temp_dir, &["diff", "--before", &before, "--after", &after]);
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["meta"][0]["before"], "2016-04-20T12:00:00-04:00");
}

#[test]
fn test_cli_diff_summary_format() {
    let temp_dir = TempDir::new().unwrap();
    let (before, after) = setup(&temp_dir);

    let output = run(
        &temp_dir,
        &["diff", "--before", &before, "--after", &after, "--format", "summary"],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("## Session Diff"));
    assert!(stdout.contains("| endTime |"));
    assert!(stdout.contains("- **Added** (1): 13"));
}

#[test]
fn test_cli_diff_exit_code_flag() {
    let temp_dir = TempDir::new().unwrap();
    let (before, after) = setup(&temp_dir);

    let changed = run(
        &temp_dir,
        &["diff", "--before", &before, "--after", &after, "--exit-code"],
    );
    assert_eq!(changed.status.code(), Some(1));

    let same = run(
        &temp_dir,
        &["diff", "--before", &before, "--after", &before, "--exit-code"],
    );
    assert_eq!(same.status.code(), Some(0));
    let report: Value = serde_json::from_slice(&same.stdout).unwrap();
    assert_eq!(report["meta"], json!([]));
}

#[test]
fn test_cli_diff_writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let (before, after) = setup(&temp_dir);
    let out_path = temp_dir.path().join("report.json");

    let output = run(
        &temp_dir,
        &[
            "diff",
            "--before",
            &before,
            "--after",
            &after,
            "--format",
            "pretty",
            "--output",
            out_path.to_str().unwrap(),
        ],
    );
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let report: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(report["candidates"]["added"], json!([{"id": 13}]));
}

#[test]
fn test_cli_diff_duplicate_ids_fail_unless_allowed() {
    let temp_dir = TempDir::new().unwrap();
    let mut dup = before_doc();
    dup["candidates"]
        .as_array_mut()
        .unwrap()
        .push(json!({"id": 11, "candidateName": "C2", "extraTime": 10}));
    let before = write_snapshot(&temp_dir, "dup.json", &dup);
    let after = write_snapshot(&temp_dir, "after.json", &after_doc());
    let before = before.to_str().unwrap();
    let after = after.to_str().unwrap();

    let rejected = run(&temp_dir, &["diff", "--before", before, "--after", after]);
    assert_eq!(rejected.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&rejected.stderr);
    assert!(stderr.contains("Error: [ERR_DUPLICATE_CANDIDATE_ID]"));
    assert!(stderr.contains("(side: before)"));
    assert!(stderr.contains("(request_id: "));

    let allowed = run(
        &temp_dir,
        &["diff", "--before", before, "--after", after, "--allow-duplicate-ids"],
    );
    assert!(allowed.status.success());
    let report: Value = serde_json::from_slice(&allowed.stdout).unwrap();
    assert_eq!(report["candidates"]["removed"], json!([]));
}

#[test]
fn test_cli_diff_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let (before, _) = setup(&temp_dir);

    let output = run(
        &temp_dir,
        &["diff", "--before", &before, "--after", "nope.json"],
    );
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("[ERR_IO] in operation 'read_snapshot'"));
}

#[test]
fn test_cli_diff_malformed_snapshot_names_side() {
    let temp_dir = TempDir::new().unwrap();
    let (before, _) = setup(&temp_dir);
    fs::write(temp_dir.path().join("broken.json"), "{\"meta\": ").unwrap();

    let output = run(
        &temp_dir,
        &["diff", "--before", &before, "--after", "broken.json"],
    );
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("[ERR_INVALID_SNAPSHOT]"));
    assert!(stderr.contains("(side: after)"));
}

#[test]
fn test_cli_validate() {
    let temp_dir = TempDir::new().unwrap();
    let (before, _) = setup(&temp_dir);

    let ok = run(&temp_dir, &["validate", &before]);
    assert!(ok.status.success());
    assert!(String::from_utf8_lossy(&ok.stdout).contains("3 candidates"));

    let mut missing = before_doc();
    missing.as_object_mut().unwrap().remove("candidates");
    let bad = write_snapshot(&temp_dir, "missing.json", &missing);
    let output = run(&temp_dir, &["validate", bad.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("[ERR_MISSING_FIELD]"));
}

#[test]
fn test_cli_bad_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let (before, after) = setup(&temp_dir);
    fs::write(temp_dir.path().join("examdiff.toml"), "[reconcile\n").unwrap();

    let output = run(&temp_dir, &["diff", "--before", &before, "--after", &after]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("[ERR_INVALID_CONFIG]"));
}

#[test]
fn test_cli_diff_output_into_missing_directory_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let (before, after) = setup(&temp_dir);
    let out_path = temp_dir.path().join("no-such-dir").join("report.json");
    let out_path = out_path.to_str().unwrap();

    let output = run(
        &temp_dir,
        &["diff", "--before", &before, "--after", &after, "--output", out_path],
    );
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: [ERR_IO] in operation 'write_report'"));
    assert!(stderr.contains(&format!("(entity_id: {})", out_path)));
    assert!(stderr.contains("(request_id: "));
}
