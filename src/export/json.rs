use crate::errors::AppResult;
use crate::export::model::ReportData;
use crate::export::notify_export_success;
use std::fs;
use std::path::Path;

/// Write both report tables as pretty JSON.
pub(crate) fn export_json(report: &ReportData, path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    notify_export_success("JSON", path);
    Ok(())
}
