use assert_cmd::Command;
use flate2::write::GzEncoder;
use flate2::Compression;
use predicates::prelude::*;
use serde_json::json;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

fn write_bundle(path: &Path, records: serde_json::Value) {
    let file = File::create(path).unwrap();
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder
        .write_all(json!({ "Records": records }).to_string().as_bytes())
        .unwrap();
    encoder.finish().unwrap();
}

fn sample_logs() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_bundle(
        &dir.path().join("a.json.gz"),
        json!([{
            "eventID": "E1",
            "eventTime": "2023-01-02T00:00:00Z",
            "eventName": "PutObject",
            "userIdentity": {"userName": "alice"},
            "requestParameters": {"bucketName": "logs-a"}
        }]),
    );
    write_bundle(
        &dir.path().join("b.json.gz"),
        json!([{
            "eventID": "E2",
            "eventTime": "2023-01-01T00:00:00Z",
            "eventName": "GetObject",
            "userIdentity": {"accountId": "123456789012"},
            "requestParameters": {"bucketName": "logs-b"}
        }]),
    );
    dir
}

fn inspector() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cloudtrail-inspector"));
    cmd.env_remove("CLOUDTRAIL_LOGS")
        .env_remove("CLOUDTRAIL_INSPECTOR_JOBS");
    cmd
}

#[test]
fn test_lists_events_chronologically() {
    let logs = sample_logs();

    let output = inspector()
        .args(["inspect", "--no-prompt", "--quiet"])
        .arg(logs.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let e1 = stdout.find("E1").unwrap();
    let e2 = stdout.find("E2").unwrap();
    assert!(e2 < e1, "E2 happened first:\n{stdout}");
    assert!(stdout.contains("123456789012"));
}

#[test]
fn test_filter_and_details() {
    let logs = sample_logs();

    inspector()
        .args(["inspect", "--no-prompt", "--quiet"])
        .arg(logs.path())
        .args(["--filter", "userIdentity.userName=alice", "--details", "E1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("logs-a"))
        .stdout(predicate::str::contains("\"eventName\": \"PutObject\""))
        .stdout(predicate::str::contains("logs-b").not());
}

#[test]
fn test_unknown_details_prints_no_record() {
    let logs = sample_logs();

    inspector()
        .args(["inspect", "--no-prompt", "--quiet", "--details", "E9"])
        .arg(logs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"eventID\"").not());
}

#[test]
fn test_fetched_count_on_stderr() {
    let logs = sample_logs();

    inspector()
        .args(["inspect", "--no-prompt", "--id", "E2"])
        .arg(logs.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("2 events"))
        .stderr(predicate::str::contains("were fetched from your log files"));
}

#[test]
fn test_prompted_session_from_stdin() {
    let logs = sample_logs();

    inspector()
        .args(["inspect", "--quiet"])
        .arg(logs.path())
        .write_stdin("y\neventName\nGetObject\nn\nE2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bucketName\": \"logs-b\""))
        .stdout(predicate::str::contains("logs-a").not());
}

#[test]
fn test_empty_directory_prints_empty_table() {
    let logs = TempDir::new().unwrap();

    inspector()
        .args(["inspect", "--no-prompt", "--quiet"])
        .arg(logs.path())
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"ID\s+[│┆]\s+Date\s+[│┆]\s+Action\s+[│┆]\s+User\s+[│┆]\s+Bucket").unwrap())
        .stdout(predicate::str::contains("┌"));
}

#[test]
fn test_missing_path_fails_with_one_line() {
    inspector()
        .args(["inspect", "--no-prompt", "/definitely/not/here"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Your path is incorrect"));
}

#[test]
fn test_corrupt_archive_fails() {
    let logs = sample_logs();
    fs::write(logs.path().join("c.json.gz"), "nope").unwrap();

    inspector()
        .args(["inspect", "--no-prompt", "--quiet"])
        .arg(logs.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to decompress archive"));
}

#[test]
fn test_invalid_filter_fails() {
    let logs = sample_logs();

    inspector()
        .args(["inspect", "--no-prompt", "--filter", "eventName"])
        .arg(logs.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid criteria"));
}

#[test]
fn test_path_from_environment() {
    let logs = sample_logs();

    inspector()
        .env("CLOUDTRAIL_LOGS", logs.path())
        .args(["inspect", "--no-prompt", "--quiet", "--jobs", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("E1"));
}

#[test]
fn test_zero_jobs_rejected() {
    let logs = sample_logs();

    inspector()
        .env("CLOUDTRAIL_INSPECTOR_JOBS", "0")
        .args(["inspect", "--no-prompt"])
        .arg(logs.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}

#[test]
fn test_generate_completion() {
    inspector()
        .args(["generate-completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cloudtrail-inspector"));
}
