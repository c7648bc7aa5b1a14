// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::json::export_json;
use crate::export::model::ReportData;
use crate::export::xlsx::export_xlsx;
use crate::models::app_state::AppState;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the site report for `state` to `path`.
    ///
    /// - `format`: xlsx (two sheets) or json (two arrays)
    /// - `force`: overwrite an existing file without asking
    pub fn export(
        state: &AppState,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<ReportData> {
        ensure_parent(path)?;
        ensure_writable(path, force)?;

        let report = ReportData::from_state(state);

        if report.is_empty() {
            warning("No machine logs or spare tools recorded yet; writing an empty report.");
        }

        match format {
            ExportFormat::Xlsx => export_xlsx(&report, path)?,
            ExportFormat::Json => export_json(&report, path)?,
        }

        Ok(report)
    }
}
