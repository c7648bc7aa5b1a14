use crate::models::alert::Alert;
use crate::models::daily_log::DailyLog;
use crate::models::machine::Machine;
use crate::models::spare_tool::SpareToolCategory;
use crate::models::user::{User, UserRole};
use serde::{Deserialize, Serialize};

/// The whole application snapshot, persisted as a single JSON blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub users: Vec<User>,
    #[serde(default)]
    pub current_user: Option<User>,
    #[serde(default)]
    pub logs: Vec<DailyLog>,
    #[serde(default)]
    pub machines: Vec<Machine>,
    #[serde(default)]
    pub spare_tools: Vec<SpareToolCategory>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            users: vec![User::default_owner()],
            current_user: None,
            logs: Vec::new(),
            machines: Vec::new(),
            spare_tools: Vec::new(),
            alerts: Vec::new(),
        }
    }
}

impl AppState {
    /// First owner account; notifications are addressed to it.
    pub fn owner(&self) -> Option<&User> {
        self.users.iter().find(|u| u.role == UserRole::Owner)
    }

    pub fn user_name(&self, id: &str) -> Option<&str> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .map(|u| u.name.as_str())
    }

    pub fn machines_of<'a>(&'a self, supervisor_id: &'a str) -> impl Iterator<Item = &'a Machine> {
        self.machines
            .iter()
            .filter(move |m| m.supervisor_id == supervisor_id)
    }

    pub fn logs_of<'a>(&'a self, supervisor_id: &'a str) -> impl Iterator<Item = &'a DailyLog> {
        self.logs
            .iter()
            .filter(move |l| l.supervisor_id == supervisor_id)
    }

    pub fn tools_of<'a>(
        &'a self,
        supervisor_id: &'a str,
    ) -> impl Iterator<Item = &'a SpareToolCategory> {
        self.spare_tools
            .iter()
            .filter(move |c| c.supervisor_id == supervisor_id)
    }
}
