//! Path utilities: `~` expansion and report file names.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `SiteControl_Report_YYYY-MM-DD.<ext>` inside `dir`.
pub fn report_file(dir: &Path, day: NaiveDate, ext: &str) -> PathBuf {
    dir.join(format!("SiteControl_Report_{}.{}", day.format("%Y-%m-%d"), ext))
}
