//! CLI behavior tests: exit codes, output formats, init.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// مِنْ بَعْدِ
const IQLAB_TEXT: &str = "\u{0645}\u{0650}\u{0646}\u{0652} \u{0628}\u{064E}\u{0639}\u{0652}\u{062F}\u{0650}";

/// Run from an empty temp dir so no stray config is picked up
fn tajweed_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tajweed"));
    cmd.current_dir(dir.path()).arg("--no-color");
    cmd
}

#[test]
fn no_args_returns_error_not_panic() {
    let dir = TempDir::new().unwrap();
    tajweed_cmd(&dir).assert().failure().code(2);
}

#[test]
fn analyze_json_lists_rules() {
    let dir = TempDir::new().unwrap();
    let output = tajweed_cmd(&dir)
        .args(["analyze", IQLAB_TEXT, "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).expect("valid JSON");
    let rules = parsed.as_array().unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0]["rule"], "Iqlab");
    assert_eq!(rules[0]["example"], "\u{0646}\u{0652} \u{0628}");
}

#[test]
fn analyze_console_output() {
    let dir = TempDir::new().unwrap();
    tajweed_cmd(&dir)
        .args(["analyze", IQLAB_TEXT])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Iqlab]"));
}

#[test]
fn feedback_identical_exit_0() {
    let dir = TempDir::new().unwrap();
    tajweed_cmd(&dir)
        .args(["feedback", "بسم الله", "بسم الله"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100%"));
}

#[test]
fn feedback_retry_exit_1() {
    let dir = TempDir::new().unwrap();
    tajweed_cmd(&dir)
        .args(["feedback", "بسم", "بسم الله"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("أعد المحاولة"));
}

#[test]
fn feedback_threshold_flag_lowers_bar() {
    let dir = TempDir::new().unwrap();
    // 50% accuracy passes with threshold 49
    tajweed_cmd(&dir)
        .args(["feedback", "بسم", "بسم الله", "--threshold", "49"])
        .assert()
        .success();
}

#[test]
fn feedback_blank_text_exit_2() {
    let dir = TempDir::new().unwrap();
    tajweed_cmd(&dir)
        .args(["feedback", "   ", "بسم الله"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("are required"));
}

#[test]
fn feedback_json_output_valid() {
    let dir = TempDir::new().unwrap();
    let output = tajweed_cmd(&dir)
        .args(["feedback", "بسم الله", "بسم الله", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    assert_eq!(parsed["accuracy"], 100);
    assert_eq!(parsed["status"], "✅ تم بنجاح");
    assert_eq!(parsed["correct"].as_array().unwrap().len(), 2);
}

#[test]
fn compare_json_output() {
    let dir = TempDir::new().unwrap();
    let output = tajweed_cmd(&dir)
        .args(["compare", "", "كلمة واحدة", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    let mistakes = parsed["mistakes"].as_array().unwrap();
    assert_eq!(mistakes.len(), 2);
    assert!(mistakes.iter().all(|m| m["got"] == "(empty)"));
    assert!(parsed["correct"].as_array().unwrap().is_empty());
}

#[test]
fn config_threshold_applies() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".tajweedrc.json"), r#"{ "threshold": 40 }"#).unwrap();
    tajweed_cmd(&dir)
        .args(["feedback", "بسم", "بسم الله"])
        .assert()
        .success();
}

#[test]
fn config_disables_rule() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".tajweedrc.json"),
        r#"{ "rules": { "iqlab": "off" } }"#,
    )
    .unwrap();
    tajweed_cmd(&dir)
        .args(["analyze", IQLAB_TEXT, "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Iqlab").not());
}

#[test]
fn missing_config_file_exit_2() {
    let dir = TempDir::new().unwrap();
    tajweed_cmd(&dir)
        .args(["analyze", "text", "--config", "nope.json"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join(".tajweedrc.json");
    tajweed_cmd(&dir)
        .arg("init")
        .arg("--dir")
        .arg(dir.path())
        .arg("--threshold")
        .arg("85")
        .assert()
        .success();
    assert!(config_path.exists(), ".tajweedrc.json should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("\"threshold\": 85"));
    assert!(content.contains("madd"));
}

#[test]
fn init_does_not_overwrite() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join(".tajweedrc.json");
    fs::write(&config_path, r#"{ "threshold": 10 }"#).unwrap();
    tajweed_cmd(&dir)
        .arg("init")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(
        fs::read_to_string(&config_path).unwrap(),
        r#"{ "threshold": 10 }"#
    );
}

#[test]
fn batch_reports_each_line() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("attempts.jsonl");
    fs::write(
        &input,
        [
            r#"{"user_text": "بسم الله", "correct_text": "بسم الله"}"#,
            "",
            r#"{"user_text": "بسم"}"#,
            "not json",
            r#"{"user_text": "بسم", "correct_text": "بسم الله"}"#,
        ]
        .join("\n"),
    )
    .unwrap();

    let output = tajweed_cmd(&dir)
        .args(["batch", "attempts.jsonl", "--json", "--jobs", "2"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let parsed: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    let entries = parsed.as_array().unwrap();
    let lines: Vec<u64> = entries.iter().map(|e| e["line"].as_u64().unwrap()).collect();
    assert_eq!(lines, vec![1, 3, 4, 5]);
    assert_eq!(entries[0]["feedback"]["accuracy"], 100);
    assert!(entries[1]["error"].as_str().unwrap().contains("are required"));
    assert_eq!(entries[2]["error"], "No JSON data provided");
    assert_eq!(entries[3]["feedback"]["accuracy"], 50);
}

#[test]
fn batch_missing_file_exit_2() {
    let dir = TempDir::new().unwrap();
    tajweed_cmd(&dir)
        .args(["batch", "missing.jsonl"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to read batch file"));
}

#[test]
fn serve_answers_each_line() {
    let dir = TempDir::new().unwrap();
    let stdin = [
        r#"{"method":"GET","path":"/health"}"#,
        r#"{"method":"POST","path":"/feedback","body":{"user_text":"بسم","correct_text":"بسم"}}"#,
        "garbage",
    ]
    .join("\n");
    let output = tajweed_cmd(&dir)
        .arg("serve")
        .write_stdin(stdin)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let responses: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(responses.len(), 3);
    assert_eq!(responses[0]["status"], 200);
    assert_eq!(responses[1]["body"]["accuracy"], 100);
    assert_eq!(responses[2]["status"], 400);
}
