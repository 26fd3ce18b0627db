mod config;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use config::{ConfigMerger, GenerateOverrides};
use schemasync_core::adapters::{FsSourcePort, FsWritePort, HttpGenerationGateway};
use schemasync_core::pipeline::{
    CheckOutcome, GenerateOutcome, ToolIdentity, run_check, run_generate, write_check_artifacts,
};
use schemasync_core::settings::{
    CheckSettings, DEFAULT_OUT_DIR, DEFAULT_RULES_PATH, DEFAULT_SCHEMA_PATH, GenerateSettings,
};
use schemasync_render::render_check_text;
use std::process::ExitCode;
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "schemasync",
    version,
    about = "Keep a GraphQL schema and its validation rules in sync, and generate test fixtures."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare schema fields against the rules document.
    Check(CheckArgs),
    /// Ask a chat-completions service for valid and invalid fixtures.
    Generate(GenerateArgs),
}

#[derive(Debug, Parser)]
struct InputArgs {
    /// GraphQL SDL document.
    #[arg(long, default_value = DEFAULT_SCHEMA_PATH)]
    schema: Utf8PathBuf,

    /// Validation rules document.
    #[arg(long, default_value = DEFAULT_RULES_PATH)]
    rules: Utf8PathBuf,
}

#[derive(Debug, Parser)]
struct CheckArgs {
    #[command(flatten)]
    inputs: InputArgs,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Fail the check when the rules document has lines that were ignored.
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Also write report.json and report.md to this directory.
    #[arg(long)]
    out: Option<Utf8PathBuf>,
}

#[derive(Debug, Parser)]
struct GenerateArgs {
    #[command(flatten)]
    inputs: InputArgs,

    /// Generation config file, JSON or TOML (default: ./config.json if present).
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Directory for valid.json and invalid.json.
    #[arg(long, default_value = DEFAULT_OUT_DIR)]
    out: Utf8PathBuf,

    /// Chat-completions endpoint URL.
    #[arg(long)]
    api_url: Option<String>,

    /// Model identifier.
    #[arg(long)]
    model: Option<String>,

    /// Sampling temperature.
    #[arg(long)]
    temperature: Option<f64>,

    /// Bearer token for the endpoint.
    #[arg(long, env = "SCHEMASYNC_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Request timeout in seconds (default: none).
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Run the consistency check first and skip generation if it fails.
    #[arg(long, default_value_t = false)]
    require_consistent: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    match real_main() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            report_error(&format!("{:#}", e));
            ExitCode::from(1)
        }
    }
}

fn real_main() -> anyhow::Result<u8> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Generate(args) => cmd_generate(args),
    }
}

fn tool_identity() -> ToolIdentity {
    ToolIdentity {
        name: "schemasync".to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    }
}

fn print_check(outcome: &CheckOutcome, show_diagnostics: bool) {
    print!("{}", render_check_text(&outcome.report, show_diagnostics));
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<u8> {
    let settings = CheckSettings {
        schema_path: args.inputs.schema,
        rules_path: args.inputs.rules,
        strict: args.strict,
    };
    debug!(?settings, "check settings");

    let outcome = match run_check(&settings, &FsSourcePort, &tool_identity()) {
        Ok(outcome) => outcome,
        Err(e) => return Ok(report_tool_error(e)),
    };

    if let Some(out) = &args.out {
        write_check_artifacts(&outcome, out, &FsWritePort)
            .with_context(|| format!("write check report to {}", out))?;
        info!("wrote check report to {}", out);
    }

    match args.format {
        OutputFormat::Text => {
            let show = settings.strict || tracing::enabled!(Level::DEBUG);
            print_check(&outcome, show);
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&outcome.report).context("serialize check report")?;
            println!("{json}");
        }
    }

    Ok(outcome.exit_code())
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<u8> {
    let file_config = config::resolve_config(args.config.as_deref(), Utf8Path::new("."))
        .context("load generation config")?;
    let generation = ConfigMerger::new(file_config).merge_generate_args(GenerateOverrides {
        api_url: args.api_url,
        model: args.model,
        temperature: args.temperature,
        api_key: args.api_key,
        timeout_secs: args.timeout_secs,
    })?;
    debug!(?generation, "generation config");

    let settings = GenerateSettings {
        schema_path: args.inputs.schema,
        rules_path: args.inputs.rules,
        out_dir: args.out,
        generation,
        require_consistent: args.require_consistent,
    };

    let outcome = match run_generate(
        &settings,
        &FsSourcePort,
        &HttpGenerationGateway::new(),
        &FsWritePort,
        &tool_identity(),
    ) {
        Ok(outcome) => outcome,
        Err(e) => return Ok(report_tool_error(e)),
    };

    match &outcome {
        GenerateOutcome::Written { .. } => {
            println!("Generated test data saved in {}", settings.out_dir);
        }
        GenerateOutcome::Malformed(malformed) => {
            println!("Generation returned invalid JSON, please check output:");
            println!("{}", malformed.raw);
        }
        GenerateOutcome::Blocked(check) => {
            print_check(check, false);
            println!("Skipping generation until schema and rules agree");
        }
    }

    Ok(outcome.exit_code())
}

/// Tool errors reach stderr even when `RUST_LOG` filters every event.
fn report_error(message: &str) {
    eprintln!("error: {message}");
    debug!(%message, "run failed");
}

fn report_tool_error(e: schemasync_core::ToolError) -> u8 {
    report_error(&e.to_string());
    e.exit_code()
}
