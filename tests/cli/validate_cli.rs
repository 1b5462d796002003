use std::fs;

use predicates::prelude::{PredicateBooleanExt, predicate};
use serde_json::{Value, json};
use tempfile::tempdir;

fn stdout_json(stdout: &[u8]) -> Value {
    serde_json::from_slice(stdout).expect("stdout json")
}

fn parse_last_stderr_json(stderr: &[u8]) -> Value {
    let text = String::from_utf8(stderr.to_vec()).expect("stderr utf8");
    let line = text
        .lines()
        .rev()
        .find(|candidate| !candidate.trim().is_empty())
        .expect("non-empty stderr line");
    serde_json::from_str(line).expect("stderr json")
}

#[test]
fn validate_passes_minimal_rule_set_from_stdin() {
    assert_cmd::cargo::cargo_bin_cmd!("brij")
        .arg("validate")
        .write_stdin(r#"[{"rule":{"condition":"not_empty","property":"name"}}]"#)
        .assert()
        .code(0)
        .stdout(predicate::str::contains(r#"{"valid":true}"#))
        .stderr(predicate::str::is_empty());
}

#[test]
fn validate_reports_every_error_with_exit_two() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("brij")
        .arg("validate")
        .write_stdin(
            r#"[
                {"id": "checkout", "rule": {"and": [
                    {"condition": "equal", "property": "country"},
                    {"condition": "approximately", "property": "total"}
                ]}},
                {"rule": {"condition": "between", "property": "age", "start": 18, "end": 65},
                 "actions": [{"callOnTrue": "admit", "retry": 3}]}
            ]"#,
        )
        .output()
        .expect("run command");

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stdout_json(&output.stdout),
        json!({
            "valid": false,
            "errors": [
                "checkout missing required additional field for equal: value",
                "checkout does not have valid condition specified: approximately",
                "Rule #1 invalid action specified: retry"
            ]
        })
    );
}

#[test]
fn validate_prints_critical_verdict_with_exit_three() {
    assert_cmd::cargo::cargo_bin_cmd!("brij")
        .arg("validate")
        .write_stdin("[{\"rule\":")
        .assert()
        .code(3)
        .stdout(predicate::str::contains(r#""critical":"Invalid JSON - "#))
        .stdout(predicate::str::contains("\"errors\"").not());
}

#[test]
fn validate_reads_yaml_input_file() {
    let dir = tempdir().expect("temp dir");
    let input_path = dir.path().join("rules.yml");
    fs::write(
        &input_path,
        r#"
- id: vip
  rule:
    or:
      - condition: in
        property: tier
        values: [gold, platinum]
      - condition: greater_than
        property: spend
        value: 1000
  actions:
    - returnOnTrue: vip
"#,
    )
    .expect("write input");

    assert_cmd::cargo::cargo_bin_cmd!("brij")
        .args([
            "validate",
            "--input",
            input_path.to_str().expect("utf8 input path"),
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(r#"{"valid":true}"#));
}

#[test]
fn validate_missing_input_file_is_input_usage_error() {
    let dir = tempdir().expect("temp dir");
    let input_path = dir.path().join("absent.json");

    assert_cmd::cargo::cargo_bin_cmd!("brij")
        .args([
            "validate",
            "--input",
            input_path.to_str().expect("utf8 input path"),
        ])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("\"error\":\"input_usage_error\""))
        .stderr(predicate::str::contains("failed to open input file"));
}

#[test]
fn validate_max_depth_flag_bounds_nesting() {
    assert_cmd::cargo::cargo_bin_cmd!("brij")
        .args(["validate", "--max-depth", "1"])
        .write_stdin(
            r#"[{"id":"deep","rule":{"if":{"if":{"condition":"is_true","property":"x"}}}}]"#,
        )
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "deep rule is too deeply nested: maximum depth is 1",
        ));
}

#[test]
fn validate_max_depth_flag_admits_nesting_past_parser_default() {
    let levels = 70;
    let document = format!(
        r#"[{{"id":"deep","rule":{}{{"condition":"is_true","property":"x"}}{}}}]"#,
        r#"{"and":["#.repeat(levels),
        "]}".repeat(levels)
    );

    assert_cmd::cargo::cargo_bin_cmd!("brij")
        .args(["validate", "--max-depth", "100"])
        .write_stdin(document.clone())
        .assert()
        .code(0)
        .stdout("{\"valid\":true}\n");

    assert_cmd::cargo::cargo_bin_cmd!("brij")
        .arg("validate")
        .write_stdin(document)
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "deep rule is too deeply nested: maximum depth is 32",
        ));
}

#[test]
fn validate_config_file_sets_max_depth() {
    let dir = tempdir().expect("temp dir");
    let config_path = dir.path().join("brij.toml");
    fs::write(&config_path, "max_depth = 1\n").expect("write config");

    assert_cmd::cargo::cargo_bin_cmd!("brij")
        .args([
            "validate",
            "--config",
            config_path.to_str().expect("utf8 config path"),
        ])
        .write_stdin(r#"[{"rule":{"and":[{"or":[{"condition":"is_true","property":"x"}]}]}}]"#)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Rule #0 rule is too deeply nested"));
}

#[test]
fn validate_rejects_malformed_config() {
    let dir = tempdir().expect("temp dir");
    let config_path = dir.path().join("brij.toml");
    fs::write(&config_path, "max_depth = \"deep\"\n").expect("write config");

    assert_cmd::cargo::cargo_bin_cmd!("brij")
        .args([
            "validate",
            "--config",
            config_path.to_str().expect("utf8 config path"),
        ])
        .write_stdin("[]")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("failed to parse config file"));
}

#[test]
fn validate_emit_pipeline_uses_required_step_names() {
    let output = assert_cmd::cargo::cargo_bin_cmd!("brij")
        .args(["validate", "--emit-pipeline"])
        .write_stdin("[]")
        .output()
        .expect("run command");

    assert_eq!(output.status.code(), Some(0));
    let stderr_json = parse_last_stderr_json(&output.stderr);
    assert_eq!(stderr_json["command"], Value::from("validate"));
    assert_eq!(
        stderr_json["steps"],
        json!([
            "load_validate_config",
            "read_rule_set_document",
            "parse_rule_set_array",
            "validate_rule_sets",
            "write_validation_report"
        ])
    );
    assert_eq!(stderr_json["input"]["sources"][0]["source"], Value::from("stdin"));
    assert_eq!(stderr_json["input"]["sources"][0]["format"], Value::from("json"));
}
