use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn converts_fixture_and_prints_summary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("missions.jsonish");

    Command::cargo_bin("convert_missions")
        .expect("convert_missions bin")
        .args(["tests/data/missions.txt", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Converted 3 missions → "))
        .stdout(predicate::str::contains("missions.jsonish"));

    let written = fs::read_to_string(&output).expect("output written");
    assert_eq!(written.matches("\n\t{\n").count(), 3);
    assert!(written.contains("name: \"Bank Heist at \\\"The Vault\\\"\","));
}

#[test]
fn missing_arguments_exit_with_usage() {
    Command::cargo_bin("convert_missions")
        .expect("convert_missions bin")
        .arg("only-input.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));

    Command::cargo_bin("convert_missions")
        .expect("convert_missions bin")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn malformed_input_fails_without_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("broken.txt");
    let output = dir.path().join("out.jsonish");
    fs::write(&input, "Name\nType\nCaller\nDesc\n0\n1 2\n1 2 3 4 five\n").unwrap();

    Command::cargo_bin("convert_missions")
        .expect("convert_missions bin")
        .args([input.to_str().unwrap(), output.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line 7"));

    assert!(!output.exists());
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    Command::cargo_bin("convert_missions")
        .expect("convert_missions bin")
        .args([
            dir.path().join("nope.txt").to_str().unwrap(),
            dir.path().join("out.jsonish").to_str().unwrap(),
        ])
        .assert()
        .failure();
}

#[test]
fn jsonish_check_reads_converted_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = dir.path().join("missions.jsonish");

    Command::cargo_bin("convert_missions")
        .expect("convert_missions bin")
        .args(["tests/data/missions.txt", output.to_str().unwrap()])
        .assert()
        .success();

    Command::cargo_bin("jsonish_check")
        .expect("jsonish_check bin")
        .args([output.to_str().unwrap(), "--missions"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("3 missions in "));

    let assert = Command::cargo_bin("jsonish_check")
        .expect("jsonish_check bin")
        .arg(output.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"INTELLIGENCE\": 5"))
        .stdout(predicate::str::contains("\"dangerous\": false"));

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let keys = [
        "\"COMBAT\"",
        "\"VIGOR\"",
        "\"MOBILITY\"",
        "\"CHARISMA\"",
        "\"INTELLIGENCE\"",
    ];
    let offsets: Vec<_> = keys
        .iter()
        .map(|key| stdout.find(key).expect("attribute key printed"))
        .collect();
    assert!(
        offsets.windows(2).all(|pair| pair[0] < pair[1]),
        "attributes printed out of order:\n{stdout}"
    );
    assert!(stdout.find("\"name\"").unwrap() < stdout.find("\"type\"").unwrap());
}

#[test]
fn jsonish_check_reports_syntax_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("bad.jsonish");
    fs::write(&input, "[\n\t{ name \"x\" },\n]").unwrap();

    Command::cargo_bin("jsonish_check")
        .expect("jsonish_check bin")
        .arg(input.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}
