use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cargo_bin() -> &'static str {
    "commafix"
}

const BROKEN: &str = "{\n  \"list\": [\n    {\"a\": [1]\n    \"b\": 2}\n  ]\n  \"next\": true\n}\n";
const FIXED: &str = "{\n  \"list\": [\n    {\"a\": [1],\n    \"b\": 2}\n  ],\n  \"next\": true\n}\n";

#[test]
fn cli_in_place_prints_message_once() {
    let dir = tempdir().unwrap();
    let inp = dir.path().join("data.json");
    fs::write(&inp, BROKEN).unwrap();
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .arg(inp.to_str().unwrap())
        .assert()
        .success()
        .stdout("Fixed JSON formatting\n");
    let s = fs::read_to_string(&inp).unwrap();
    assert_eq!(s, FIXED);
    let v: serde_json::Value = serde_json::from_str(&s).unwrap();
    assert_eq!(v["next"], true);
}

#[test]
fn cli_default_path() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    let doc = dir.path().join("data").join("platforms.json");
    fs::write(&doc, "]\n  \"name\"").unwrap();
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixed JSON formatting"));
    assert_eq!(fs::read_to_string(&doc).unwrap(), "],\n  \"name\"");
}

#[test]
fn cli_missing_file_fails() {
    let dir = tempdir().unwrap();
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .arg(dir.path().join("nope.json").to_str().unwrap())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error: failed to read"));
}

#[test]
fn cli_unknown_option_is_usage_error() {
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .arg("--frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn cli_stdout_writes_nothing() {
    let dir = tempdir().unwrap();
    let inp = dir.path().join("data.json");
    fs::write(&inp, BROKEN).unwrap();
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .args(["--stdout", inp.to_str().unwrap()])
        .assert()
        .success()
        .stdout(FIXED);
    assert_eq!(fs::read_to_string(&inp).unwrap(), BROKEN);
}

#[test]
fn cli_output_file() {
    let dir = tempdir().unwrap();
    let inp = dir.path().join("in.json");
    let out = dir.path().join("out.json");
    fs::write(&inp, BROKEN).unwrap();
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .args([inp.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&inp).unwrap(), BROKEN);
    assert_eq!(fs::read_to_string(&out).unwrap(), FIXED);
}

#[test]
fn cli_regex_engine_same_result() {
    let dir = tempdir().unwrap();
    let inp = dir.path().join("data.json");
    fs::write(&inp, BROKEN).unwrap();
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .args(["--engine", "regex", inp.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&inp).unwrap(), FIXED);
}

#[test]
fn cli_validate_rejects_remaining_defects() {
    let dir = tempdir().unwrap();
    let inp = dir.path().join("data.json");
    let broken = "[\n  [1]\n  \"a\"\n  \"b\"\n]";
    fs::write(&inp, broken).unwrap();
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .args(["--validate", inp.to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not valid JSON"));
    assert_eq!(fs::read_to_string(&inp).unwrap(), broken);
}

#[test]
fn cli_validate_accepts_repaired_json() {
    let dir = tempdir().unwrap();
    let inp = dir.path().join("data.json");
    fs::write(&inp, BROKEN).unwrap();
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .args(["--validate", inp.to_str().unwrap()])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&inp).unwrap(), FIXED);
}

#[test]
fn cli_log_to_stderr() {
    let dir = tempdir().unwrap();
    let inp = dir.path().join("data.json");
    fs::write(&inp, BROKEN).unwrap();
    Command::cargo_bin(cargo_bin())
        .unwrap()
        .args(["--log", inp.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("array-close at"));
}

#[test]
fn cli_log_json_to_stderr() {
    let dir = tempdir().unwrap();
    let inp = dir.path().join("data.json");
    fs::write(&inp, BROKEN).unwrap();
    let assert = Command::cargo_bin(cargo_bin())
        .unwrap()
        .args(["--log-json", inp.to_str().unwrap()])
        .assert()
        .success();
    let err = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    let v: serde_json::Value = serde_json::from_str(err.trim()).unwrap();
    assert_eq!(v.as_array().map(|a| a.len()), Some(2));
}
