use std::io;
use std::path::PathBuf;
use std::process;

use brij::cmd::{schema, validate};
use brij::domain::report::{PipelineInput, PipelineInputSource, PipelineReport};
use brij::io::{self as brij_io, Format};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "brij", version, about = "Rule-set document validator")]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    emit_pipeline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a rule-set document and report every violation.
    Validate(ValidateArgs),
    /// Print the schema tables rule-set documents are checked against.
    Schema,
}

#[derive(Debug, clap::Args)]
struct ValidateArgs {
    /// Rule-set document path; stdin when omitted or `-`.
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, value_enum)]
    from: Option<CliInputFormat>,

    /// TOML file with validator settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum combinator nesting below each rule root.
    #[arg(long)]
    max_depth: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliInputFormat {
    Json,
    Yaml,
}

impl From<CliInputFormat> for Format {
    fn from(value: CliInputFormat) -> Self {
        match value {
            CliInputFormat::Json => Self::Json,
            CliInputFormat::Yaml => Self::Yaml,
        }
    }
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    init_tracing();
    process::exit(run());
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    let emit_pipeline = cli.emit_pipeline;
    match cli.command {
        Commands::Validate(args) => run_validate(args, emit_pipeline),
        Commands::Schema => run_schema(emit_pipeline),
    }
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"kind": "cli_parse_error"}),
                3,
            );
            3
        }
    }
}

fn run_validate(args: ValidateArgs, emit_pipeline: bool) -> i32 {
    let command_args = validate::ValidateCommandArgs {
        input: args.input.clone(),
        from: args.from.map(Into::into),
        config: args.config.clone(),
        max_depth: args.max_depth,
    };
    let pipeline_report = build_validate_pipeline_report(&command_args);

    let stdin = io::stdin();
    let response = validate::run_with_stdin(&command_args, stdin.lock());

    // Critical verdicts (exit 3) carry a report and go to stdout like other verdicts.
    let is_report = response.payload.get("valid").is_some();
    let written = if is_report {
        emit_json_stdout(&response.payload)
    } else {
        emit_json_stderr(&response.payload)
    };
    let exit_code = if written {
        response.exit_code
    } else {
        emit_error(
            "internal_error",
            "failed to serialize validate response".to_string(),
            json!({"command": "validate"}),
            1,
        );
        1
    };

    if emit_pipeline {
        emit_pipeline_report(&pipeline_report);
    }
    exit_code
}

fn run_schema(emit_pipeline: bool) -> i32 {
    let exit_code = if emit_json_stdout(&schema::schema_payload()) {
        0
    } else {
        emit_error(
            "internal_error",
            "failed to serialize schema tables".to_string(),
            json!({"command": "schema"}),
            1,
        );
        1
    };

    if emit_pipeline {
        emit_pipeline_report(&PipelineReport::new(
            "schema",
            PipelineInput::new(Vec::new()),
            schema::pipeline_steps(),
            schema::deterministic_guards(),
        ));
    }
    exit_code
}

fn build_validate_pipeline_report(args: &validate::ValidateCommandArgs) -> PipelineReport {
    let input = args
        .input
        .as_deref()
        .filter(|path| !validate::is_stdin_path(path));
    let input_format = brij_io::resolve_input_format(args.from, input).ok();

    let mut sources = Vec::with_capacity(2);
    if let Some(path) = &args.config {
        sources.push(PipelineInputSource::path(
            "config",
            path.display().to_string(),
            Some("toml"),
        ));
    }
    match input {
        Some(path) => sources.push(PipelineInputSource::path(
            "input",
            path.display().to_string(),
            format_label(input_format),
        )),
        None => sources.push(PipelineInputSource::stdin(
            "input",
            format_label(input_format),
        )),
    }

    PipelineReport::new(
        "validate",
        PipelineInput::new(sources),
        validate::pipeline_steps(),
        validate::deterministic_guards(),
    )
}

fn format_label(format: Option<Format>) -> Option<&'static str> {
    format.map(Format::as_str)
}

fn emit_json_stdout(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            println!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_json_stderr(value: &Value) -> bool {
    match serde_json::to_string(value) {
        Ok(serialized) => {
            eprintln!("{serialized}");
            true
        }
        Err(_) => false,
    }
}

fn emit_pipeline_report(report: &PipelineReport) {
    match serde_json::to_string(report) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(error) => emit_error(
            "internal_error",
            format!("failed to serialize pipeline report: {error}"),
            json!({"command": "emit_pipeline"}),
            1,
        ),
    }
}

fn emit_error(error: &'static str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
