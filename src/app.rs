//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - resolves the run configuration (flags, then env, then defaults)
//! - dispatches subcommands
//! - prints summaries and writes exports

use std::io::Read;
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;

use crate::cli::{CalcArgs, Cli, Command, ExportArgs, FormArgs};
use crate::coefficients::DEFAULT_STANDARD;
use crate::domain::{CalculationResult, CoefficientMode, RunConfig};
use crate::error::AppError;
use crate::remote::{RemoteRequest, RemoteResponse, handle_request};
use crate::report::{format_calculation_summary, format_standards, prepare_export};
use crate::storage::{FileStore, FormStorage, StoredForm};

pub mod pipeline;

pub const ENV_MODE: &str = "HSE_COEFFICIENT_MODE";
pub const ENV_REMOTE_URL: &str = "HSE_REMOTE_URL";
pub const ENV_STORAGE_PATH: &str = "HSE_STORAGE_PATH";
pub const DEFAULT_STORAGE_PATH: &str = ".hse-flow/storage.json";

/// Entry point for the `hse` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);

    let remote_flag = match &cli.command {
        Command::Calc(args) => args.remote.clone(),
        _ => None,
    };
    let config = resolve_config(cli.mode, cli.storage.clone(), remote_flag, |key| std::env::var(key).ok())?;

    match cli.command {
        Command::Calc(args) => handle_calc(&config, args),
        Command::Load => handle_load(&config),
        Command::Clear => handle_clear(&config),
        Command::Export(args) => handle_export(&config, args),
        Command::Standards => {
            print!("{}", format_standards(DEFAULT_STANDARD));
            Ok(())
        }
        Command::Respond => handle_respond(&config),
    }
}

/// Merge flags with environment values and defaults.
///
/// `env` is the variable lookup, injected so tests do not touch the process environment.
pub fn resolve_config(
    mode: Option<CoefficientMode>,
    storage: Option<PathBuf>,
    remote: Option<String>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<RunConfig, AppError> {
    let mode = match mode {
        Some(mode) => mode,
        None => match env(ENV_MODE).filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .parse::<CoefficientMode>()
                .map_err(|e| AppError::input(format!("Invalid {ENV_MODE}: {e}")))?,
            None => CoefficientMode::default(),
        },
    };

    let storage_path = storage
        .or_else(|| env(ENV_STORAGE_PATH).filter(|v| !v.trim().is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH));

    let remote_url = remote
        .or_else(|| env(ENV_REMOTE_URL))
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty());

    Ok(RunConfig {
        mode,
        storage_path,
        remote_url,
    })
}

/// Form record for the given flags; unset fields stay empty, like an untouched form.
pub fn form_from_args(args: &FormArgs) -> StoredForm {
    StoredForm {
        hours_worked: args.hours_worked.clone().unwrap_or_default(),
        accidents_count: args.accidents_count.clone().unwrap_or_default(),
        days_lost: args.days_lost.clone().unwrap_or_default(),
        coefficient: args.coefficient.unwrap_or(DEFAULT_STANDARD),
    }
}

fn storage(config: &RunConfig) -> FormStorage<FileStore> {
    FormStorage::new(FileStore::new(&config.storage_path))
}

fn handle_calc(config: &RunConfig, args: CalcArgs) -> Result<(), AppError> {
    let form = form_from_args(&args.form);
    if args.save {
        storage(config).save(&form);
    }

    let run = pipeline::run_calculation(config, form.to_input());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&run.result)?);
    } else if run.result.error().is_none() {
        print!("{}", format_calculation_summary(&run.result, run.standard, config.mode));
    }

    match run.result {
        CalculationResult::Failed(message) => Err(AppError::input(message)),
        _ => Ok(()),
    }
}

fn handle_load(config: &RunConfig) -> Result<(), AppError> {
    let Some(form) = storage(config).load() else {
        println!("No stored form.");
        return Ok(());
    };

    println!("Stored form:");
    println!("  hours worked   : {}", form.hours_worked);
    println!("  accidents      : {}", form.accidents_count);
    println!("  days lost      : {}", form.days_lost);
    println!("  coefficient    : {}", form.coefficient);
    println!();

    let run = pipeline::run_calculation(config, form.to_input());
    print!("{}", format_calculation_summary(&run.result, run.standard, config.mode));
    Ok(())
}

fn handle_clear(config: &RunConfig) -> Result<(), AppError> {
    let mut storage = storage(config);
    storage.clear();
    println!("Stored form cleared ({}).", storage.store().path().display());
    Ok(())
}

fn handle_export(config: &RunConfig, args: ExportArgs) -> Result<(), AppError> {
    let form = if args.form.is_empty() {
        storage(config)
            .load()
            .map(|mut stored| {
                if let Some(coefficient) = args.form.coefficient {
                    stored.coefficient = coefficient;
                }
                stored
            })
            .ok_or_else(|| AppError::input("Nothing to export: no stored form and no values given."))?
    } else {
        form_from_args(&args.form)
    };

    let run = pipeline::run_calculation(config, form.to_input());
    let rates = match run.result {
        CalculationResult::Computed(rates) => rates,
        CalculationResult::Pending => {
            return Err(AppError::input("Hours worked is required to export a scorecard."));
        }
        CalculationResult::Failed(message) => return Err(AppError::input(message)),
    };

    let export = prepare_export(rates.tf, rates.tg, run.standard, args.format, Local::now().naive_local())?;
    let path = crate::io::write_scorecard_json(&args.out, &export)?;
    println!("Scorecard written to {} (render as {}).", path.display(), export.filename);
    Ok(())
}

fn handle_respond(config: &RunConfig) -> Result<(), AppError> {
    let mut body = String::new();
    std::io::stdin()
        .read_to_string(&mut body)
        .map_err(|e| AppError::runtime(format!("Failed to read request from stdin: {e}")))?;

    println!("{}", serde_json::to_string(&respond_to(&body, config.mode))?);
    Ok(())
}

/// Decode one request body and answer it; malformed bodies get a failed response.
pub fn respond_to(body: &str, mode: CoefficientMode) -> RemoteResponse {
    match serde_json::from_str::<RemoteRequest>(body) {
        Ok(request) => handle_request(&request, mode),
        Err(err) => RemoteResponse::failed(format!("Invalid request: {err}")),
    }
}
