//! CLI behavior tests: exit codes, output formats, stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const SAMPLE: &str = "Good morning everyone. My name is Ada and I am twelve years old. \
                      I go to school, I love my family, and my hobby is chess. Thank you.";

fn podium_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_podium"))
}

fn write_transcript(dir: &tempfile::TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn no_args_returns_error_not_panic() {
    let mut cmd = podium_cmd();
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("PATH"));
}

#[test]
fn file_not_found_exit_2() {
    let mut cmd = podium_cmd();
    cmd.arg("nonexistent.txt");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("nonexistent"));
}

#[test]
fn json_output_valid() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_transcript(&dir, "sample.txt", SAMPLE);
    let mut cmd = podium_cmd();
    cmd.arg(&path).arg("--json");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(s.trim()).expect("valid JSON");
    assert!(value["overallScore"].is_number());
    assert!(value["criterionScores"]["salutation"]["score"].is_number());
}

#[test]
fn below_threshold_exit_1() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_transcript(&dir, "weak.txt", "um um um um");
    let mut cmd = podium_cmd();
    cmd.arg(&path).arg("--threshold").arg("100");
    cmd.assert().failure().code(1);
}

#[test]
fn above_threshold_exit_0() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_transcript(&dir, "sample.txt", SAMPLE);
    let mut cmd = podium_cmd();
    cmd.arg(&path).arg("--threshold").arg("20");
    cmd.assert().success();
}

#[test]
fn stdin_transcript_via_dash() {
    let mut cmd = podium_cmd();
    cmd.arg("-").arg("--json").write_stdin(SAMPLE);
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    assert!(value["wordCount"].as_u64().unwrap() > 0);
}

#[test]
fn quiet_mode_prints_one_line() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_transcript(&dir, "sample.txt", SAMPLE);
    let mut cmd = podium_cmd();
    cmd.arg(&path).arg("--quiet");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    assert_eq!(s.trim().lines().count(), 1);
    assert!(s.contains("/ 110"));
}

#[test]
fn duration_flag_fills_speech_rate_wpm() {
    let dir = tempfile::TempDir::new().unwrap();
    // 52 words in 26 seconds = 120 WPM
    let path = write_transcript(&dir, "timed.txt", &vec!["word"; 52].join(" "));
    let mut cmd = podium_cmd();
    cmd.arg(&path).arg("--duration").arg("26").arg("--json");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    assert_eq!(value["criterionScores"]["speechRate"]["details"]["wpm"], 120);
}

#[test]
fn directory_scoring_reports_each_transcript() {
    let dir = tempfile::TempDir::new().unwrap();
    write_transcript(&dir, "a.txt", SAMPLE);
    write_transcript(&dir, "b.txt", "Hello, I am Ben.");
    write_transcript(&dir, "ignored.md", "not a transcript");
    let mut cmd = podium_cmd();
    cmd.arg(dir.path()).arg("--quiet");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    assert_eq!(s.trim().lines().count(), 2);
    assert!(s.contains("a.txt"));
    assert!(s.contains("b.txt"));
    assert!(!s.contains("ignored.md"));
}

#[test]
fn empty_directory_exit_2() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = podium_cmd();
    cmd.arg(dir.path());
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No .txt transcripts"));
}

#[test]
fn config_file_supplies_the_threshold() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_transcript(&dir, "weak.txt", "um um um um");
    fs::write(dir.path().join(".podiumrc.json"), r#"{ "threshold": 100 }"#).unwrap();
    let mut cmd = podium_cmd();
    cmd.current_dir(dir.path()).arg(&path);
    cmd.assert().failure().code(1);
}

#[test]
fn cli_threshold_overrides_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write_transcript(&dir, "weak.txt", "um um um um");
    fs::write(dir.path().join(".podiumrc.json"), r#"{ "threshold": 100 }"#).unwrap();
    let mut cmd = podium_cmd();
    cmd.current_dir(dir.path())
        .arg(&path)
        .arg("--threshold")
        .arg("1");
    cmd.assert().success();
}
