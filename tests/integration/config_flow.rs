use std::fs;
use std::io::Cursor;

use brij::cmd::validate::{ValidateCommandArgs, run_with_stdin};
use brij::domain::config::{DEFAULT_MAX_DEPTH, ValidatorConfig};
use serde_json::json;
use tempfile::tempdir;

fn nested_and(levels: usize) -> String {
    let mut rule = r#"{"condition":"not_empty","property":"name"}"#.to_string();
    for _ in 0..levels {
        rule = format!(r#"{{"and":[{rule}]}}"#);
    }
    format!(r#"[{{"id":"nested","rule":{rule}}}]"#)
}

#[test]
fn default_depth_accepts_moderate_nesting() {
    let response = run_with_stdin(
        &ValidateCommandArgs::default(),
        Cursor::new(nested_and(DEFAULT_MAX_DEPTH)),
    );
    assert_eq!(response.exit_code, 0);
}

#[test]
fn config_file_depth_applies_and_flag_overrides_it() {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("brij.toml");
    fs::write(&config_path, "max_depth = 2\n").expect("write config");
    assert_eq!(
        ValidatorConfig::load(&config_path).expect("config").max_depth,
        2
    );

    let from_file = ValidateCommandArgs {
        config: Some(config_path.clone()),
        ..ValidateCommandArgs::default()
    };
    let response = run_with_stdin(&from_file, Cursor::new(nested_and(3)));
    assert_eq!(response.exit_code, 2);
    assert_eq!(
        response.payload["errors"],
        json!(["nested rule is too deeply nested: maximum depth is 2"])
    );

    let overridden = ValidateCommandArgs {
        config: Some(config_path),
        max_depth: Some(3),
        ..ValidateCommandArgs::default()
    };
    let response = run_with_stdin(&overridden, Cursor::new(nested_and(3)));
    assert_eq!(response.exit_code, 0);
}

#[test]
fn missing_config_file_is_input_usage_error() {
    let dir = tempdir().expect("tempdir");
    let args = ValidateCommandArgs {
        config: Some(dir.path().join("absent.toml")),
        ..ValidateCommandArgs::default()
    };
    let response = run_with_stdin(&args, Cursor::new("[]"));
    assert_eq!(response.exit_code, 3);
    assert_eq!(response.payload["error"], json!("input_usage_error"));
    assert!(
        response.payload["message"]
            .as_str()
            .expect("message")
            .contains("failed to read config file")
    );
}
