use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::config::ValidatorConfig;
use crate::domain::error::ValidateError;
use crate::domain::rules::ValidationReport;
use crate::engine::validate;
use crate::io::{self, Format, reader};

/// Input arguments for validate command execution API.
#[derive(Debug, Clone, Default)]
pub struct ValidateCommandArgs {
    pub input: Option<PathBuf>,
    pub from: Option<Format>,
    pub config: Option<PathBuf>,
    pub max_depth: Option<usize>,
}

/// Structured command response that carries exit-code mapping and JSON payload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ValidateCommandResponse {
    pub exit_code: i32,
    pub payload: Value,
}

pub fn run_with_stdin<R: Read>(args: &ValidateCommandArgs, stdin: R) -> ValidateCommandResponse {
    match execute(args, stdin) {
        Ok(report) => report_response(&report),
        Err(error @ ValidateError::SerializeReport { .. }) => ValidateCommandResponse {
            exit_code: 1,
            payload: json!({
                "error": "internal_error",
                "message": error.to_string(),
            }),
        },
        Err(error) => ValidateCommandResponse {
            exit_code: 3,
            payload: json!({
                "error": "input_usage_error",
                "message": error.to_string(),
            }),
        },
    }
}

/// Ordered pipeline-step names used for `--emit-pipeline` diagnostics.
pub fn pipeline_steps() -> Vec<String> {
    vec![
        "load_validate_config".to_string(),
        "read_rule_set_document".to_string(),
        "parse_rule_set_array".to_string(),
        "validate_rule_sets".to_string(),
        "write_validation_report".to_string(),
    ]
}

/// Determinism guards applied by the `validate` command.
pub fn deterministic_guards() -> Vec<String> {
    vec![
        "rust_native_execution".to_string(),
        "schema_table_order_reporting".to_string(),
        "rule_set_input_order_reporting".to_string(),
        "no_shared_validation_state".to_string(),
        "bounded_rule_tree_depth".to_string(),
        "validate_exit_mapping_0_2_3_1".to_string(),
    ]
}

/// Treat `-` as stdin for command-level input resolution.
pub fn is_stdin_path(path: &Path) -> bool {
    path == Path::new("-") || path == Path::new("/dev/stdin")
}

fn report_response(report: &ValidationReport) -> ValidateCommandResponse {
    let exit_code = if report.valid {
        0
    } else if report.is_critical() {
        3
    } else {
        2
    };
    match serde_json::to_value(report) {
        Ok(payload) => ValidateCommandResponse { exit_code, payload },
        Err(source) => ValidateCommandResponse {
            exit_code: 1,
            payload: json!({
                "error": "internal_error",
                "message": ValidateError::SerializeReport { source }.to_string(),
            }),
        },
    }
}

fn execute<R: Read>(args: &ValidateCommandArgs, stdin: R) -> Result<ValidationReport, ValidateError> {
    let config = load_config(args)?;
    let input = args.input.as_deref().filter(|path| !is_stdin_path(path));
    let format = io::resolve_input_format(args.from, input)
        .map_err(|source| ValidateError::ResolveInput { source })?;
    let bytes = read_input(input, stdin)?;
    Ok(validate::validate_bytes(&bytes, format, config.limits()))
}

fn load_config(args: &ValidateCommandArgs) -> Result<ValidatorConfig, ValidateError> {
    let config = match &args.config {
        Some(path) => ValidatorConfig::load(path)?,
        None => ValidatorConfig::default(),
    };
    Ok(config.with_max_depth(args.max_depth)?)
}

fn read_input<R: Read>(input: Option<&Path>, stdin: R) -> Result<Vec<u8>, ValidateError> {
    let bytes = match input {
        Some(path) => {
            let file = File::open(path).map_err(|source| ValidateError::OpenInput {
                path: path.display().to_string(),
                source,
            })?;
            reader::read_input_bytes(file)
        }
        None => reader::read_input_bytes(stdin),
    };
    bytes.map_err(|source| ValidateError::ReadInput { source })
}
