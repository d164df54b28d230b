//! Write scorecard documents.
//!
//! The document is the render-ready JSON form of `ScorecardExport`. It is
//! named after the export filename with a `.json` extension, so a renderer
//! can pick it up and produce the PDF under the original name.

use std::fs::{File, create_dir_all};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::AppError;
use crate::report::ScorecardExport;

/// Write the scorecard document into `dir` and return its path.
pub fn write_scorecard_json(dir: &Path, export: &ScorecardExport) -> Result<PathBuf, AppError> {
    create_dir_all(dir)
        .map_err(|e| AppError::runtime(format!("Failed to create export dir '{}': {e}", dir.display())))?;

    let path = dir.join(&export.filename).with_extension("json");
    let file = File::create(&path)
        .map_err(|e| AppError::runtime(format!("Failed to create scorecard '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, export)
        .map_err(|e| AppError::runtime(format!("Failed to write scorecard JSON: {e}")))?;

    info!(path = %path.display(), "wrote scorecard document");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CoefficientStandard;
    use crate::report::{ExportFormat, prepare_export};
    use chrono::NaiveDate;

    #[test]
    fn writes_json_named_after_export() {
        let at = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap().and_hms_opt(8, 0, 0).unwrap();
        let export = prepare_export(4.0, 0.04, CoefficientStandard::European, ExportFormat::Pdf, at).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("exports");
        let path = write_scorecard_json(&out, &export).unwrap();
        assert_eq!(path, out.join("hse-flow-scorecard-20250102.json"));

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["filename"], "hse-flow-scorecard-20250102.pdf");
        assert_eq!(value["scorecard"]["tf_display"], "4,00");
        assert_eq!(value["scorecard"]["coefficient"], "european");
    }
}
