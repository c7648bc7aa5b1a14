// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod json;
pub mod logic;
pub mod model;
mod xlsx;

pub use logic::ExportLogic;
pub use model::{MachineLogRow, ReportData, SpareToolRow};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Sheet titles of the report workbook, in order.
pub const LOGS_SHEET: &str = "Daily Machine Logs";
pub const TOOLS_SHEET: &str = "Spare Tools Inventory";

/// Common completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Json => "json",
        }
    }
}
