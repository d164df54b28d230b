//! Command-line parsing for the `hse` safety-indicator tool.
//!
//! Parsing and dispatch stay here and in `app`; the calculator never sees
//! clap types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{CoefficientMode, CoefficientStandard};
use crate::report::ExportFormat;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "hse", version, about = "Workplace safety indicators (TF / TG)")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Storage file for the last-entered form [env: HSE_STORAGE_PATH].
    #[arg(long, global = true, value_name = "PATH")]
    pub storage: Option<PathBuf>,

    /// Coefficient mode [env: HSE_COEFFICIENT_MODE] [default: fixed].
    #[arg(long, global = true, value_enum)]
    pub mode: Option<CoefficientMode>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute TF and TG.
    Calc(CalcArgs),
    /// Show the stored form and its indicators.
    Load,
    /// Forget the stored form.
    Clear,
    /// Write the scorecard document for the stored form (or the given values).
    Export(ExportArgs),
    /// List the coefficient standards.
    Standards,
    /// Answer one remote calculation request: JSON on stdin, JSON on stdout.
    Respond,
}

/// The three counters plus the standard, as typed.
///
/// Values are kept as text so that validation messages match what the form
/// would show.
#[derive(Debug, Args, Clone)]
pub struct FormArgs {
    /// Hours worked over the period.
    #[arg(long = "hours", value_name = "N", allow_hyphen_values = true)]
    pub hours_worked: Option<String>,

    /// Accidents with lost time.
    #[arg(long = "accidents", value_name = "N", allow_hyphen_values = true)]
    pub accidents_count: Option<String>,

    /// Days lost to those accidents.
    #[arg(long = "days", value_name = "N", allow_hyphen_values = true)]
    pub days_lost: Option<String>,

    /// Coefficient standard.
    #[arg(short = 'c', long, value_enum)]
    pub coefficient: Option<CoefficientStandard>,
}

impl FormArgs {
    pub fn is_empty(&self) -> bool {
        self.hours_worked.is_none() && self.accidents_count.is_none() && self.days_lost.is_none()
    }
}

#[derive(Debug, Args, Clone)]
pub struct CalcArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Remote calculation endpoint [env: HSE_REMOTE_URL]; falls back to local on failure.
    #[arg(long, value_name = "URL")]
    pub remote: Option<String>,

    /// Save the form for the next run.
    #[arg(long)]
    pub save: bool,

    /// Print the result as JSON instead of a summary.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Export format. Only `pdf` is produced here.
    #[arg(long, value_enum, default_value_t = ExportFormat::Pdf)]
    pub format: ExportFormat,

    /// Output directory.
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out: PathBuf,
}
