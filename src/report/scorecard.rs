//! Scorecard export boundary.
//!
//! Turns a computed TF/TG pair into a render-ready scorecard and its export
//! descriptor. Rendering to PDF bytes belongs to an external renderer; PNG is
//! produced client-side and is refused here.

use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coefficients;
use crate::domain::CoefficientStandard;
use crate::report::format::{format_rate, format_timestamp};

pub const SCORECARD_TITLE: &str = "HSE-Flow";
pub const SCORECARD_SUBTITLE: &str = "Safety Scorecard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Png,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("{0}")]
    Invalid(String),

    #[error("Format not supported server-side; render PNG on the client")]
    UnsupportedFormat,
}

/// Everything a renderer needs to draw the card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    pub title: String,
    pub subtitle: String,
    pub tf: f64,
    pub tg: f64,
    pub tf_display: String,
    pub tg_display: String,
    pub coefficient: CoefficientStandard,
    pub coefficient_label: String,
    pub generated_at: NaiveDateTime,
    pub generated_display: String,
}

/// A validated export request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardExport {
    pub filename: String,
    pub mime_type: String,
    pub scorecard: Scorecard,
}

/// Validate a result for export and build the scorecard.
///
/// Value checks run before the format check, so an invalid result is
/// reported even when the format is also wrong.
pub fn prepare_export(
    tf: f64,
    tg: f64,
    standard: CoefficientStandard,
    format: ExportFormat,
    generated_at: NaiveDateTime,
) -> Result<ScorecardExport, ExportError> {
    if !(tf.is_finite() && tf > 0.0) {
        return Err(ExportError::Invalid("TF must be a positive number".to_string()));
    }
    if !(tg.is_finite() && tg >= 0.0) {
        return Err(ExportError::Invalid("TG must be a positive number or zero".to_string()));
    }
    if format != ExportFormat::Pdf {
        return Err(ExportError::UnsupportedFormat);
    }

    let scorecard = Scorecard {
        title: SCORECARD_TITLE.to_string(),
        subtitle: SCORECARD_SUBTITLE.to_string(),
        tf,
        tg,
        tf_display: format_rate(tf),
        tg_display: format_rate(tg),
        coefficient: standard,
        coefficient_label: coefficients::label_of(standard).to_string(),
        generated_at,
        generated_display: format_timestamp(generated_at),
    };

    Ok(ScorecardExport {
        filename: export_filename(generated_at),
        mime_type: "application/pdf".to_string(),
        scorecard,
    })
}

/// `hse-flow-scorecard-YYYYMMDD.pdf`
pub fn export_filename(generated_at: NaiveDateTime) -> String {
    format!("hse-flow-scorecard-{}.pdf", generated_at.format("%Y%m%d"))
}
