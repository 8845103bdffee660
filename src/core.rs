//! CLI execution: argument parsing, logging setup and command dispatch

use anyhow::Context;
use clap::Parser;
use std::ffi::OsString;
use std::path::Path;
use tokio::io::AsyncReadExt;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};
use crate::codegen::CodeGenerator;
use crate::config::Config;
use crate::model::RequestModel;
use crate::parser::parse_curl;
use crate::serializer::to_curl;
use crate::status::ExitStatus;
use crate::table::format_languages;

/// Main entry point for the CLI
pub fn run<I, T>(args: I) -> ExitStatus
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let parsed = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    init_logging(parsed.verbose);

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => return handle_error(anyhow::Error::new(e).context("Failed to create tokio runtime")),
    };

    match runtime.block_on(program(parsed)) {
        Ok(status) => status,
        Err(e) => handle_error(e),
    }
}

/// `RUST_LOG` wins; otherwise `-v` selects the level (default `warn`)
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}

pub async fn program(args: Args) -> anyhow::Result<ExitStatus> {
    let config = Config::load().context("Failed to load config")?;
    let engine_kind = args.engine.unwrap_or(config.engine);
    debug!(engine = %engine_kind, config_dir = %config.config_dir.display(), "Configuration loaded");

    match args.command {
        Command::Parse { curl } => {
            let engine = config.build_engine_of(engine_kind)?;
            let command = read_command(curl).await?;
            let model = parse_curl(&engine, &command).await?;
            println!("{}", serde_json::to_string_pretty(&model)?);
        }
        Command::Generate { language, curl } => {
            let engine = config.build_engine_of(engine_kind)?;
            let command = read_command(curl).await?;
            let model = parse_curl(&engine, &command).await?;
            let language = language.unwrap_or_else(|| config.default_language.clone());
            let code = CodeGenerator::new(&engine).generate_code(&model, &language).await;
            println!("{}", code);
        }
        Command::ToCurl { model } => {
            println!("{}", to_curl(&read_model(&model).await?));
        }
        Command::Languages => {
            println!("{}", format_languages());
        }
    }

    Ok(ExitStatus::Success)
}

/// The positional cURL argument, or stdin when absent or `-`
async fn read_command(arg: Option<String>) -> anyhow::Result<String> {
    match arg {
        Some(command) if command != "-" => Ok(command),
        _ => {
            let mut input = String::new();
            tokio::io::stdin()
                .read_to_string(&mut input)
                .await
                .context("Failed to read cURL command from stdin")?;
            let input = input.trim();
            if input.is_empty() {
                anyhow::bail!("No cURL command given");
            }
            Ok(input.to_string())
        }
    }
}

async fn read_model(path: &Path) -> anyhow::Result<RequestModel> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid request model in {}", path.display()))
}

fn handle_error(error: anyhow::Error) -> ExitStatus {
    eprintln!("Error: {:#}", error);
    ExitStatus::Error
}
