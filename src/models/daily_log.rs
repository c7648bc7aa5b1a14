use serde::{Deserialize, Serialize};

/// One operational entry for a machine. Machine and supervisor names are
/// denormalized at creation time and never refreshed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLog {
    pub id: String,
    pub machine_id: String,
    pub machine_name: String,
    pub timestamp: i64,
    /// Day granularity, `YYYY-MM-DD`
    pub date: String,
    /// Litres
    pub fuel_used: f64,
    pub hours_worked: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub supervisor_id: String,
    pub supervisor_name: String,
}

impl DailyLog {
    pub fn has_photo(&self) -> bool {
        self.photo_url.as_deref().is_some_and(|p| !p.is_empty())
    }
}
