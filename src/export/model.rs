// src/export/model.rs

use crate::models::app_state::AppState;
use crate::utils::formatting::yes_no;
use serde::Serialize;

/// One row of the machine-log sheet.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MachineLogRow {
    #[serde(rename = "Machine Name")]
    pub machine_name: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Fuel (L)")]
    pub fuel: f64,
    #[serde(rename = "Hours Worked")]
    pub hours: f64,
    #[serde(rename = "Supervisor")]
    pub supervisor: String,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "Has Photo")]
    pub has_photo: String,
}

/// One row of the spare-tool sheet.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SpareToolRow {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Item Name")]
    pub item_name: String,
    #[serde(rename = "Quantity")]
    pub quantity: i64,
    #[serde(rename = "Managed By")]
    pub managed_by: String,
}

#[derive(Serialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub machine_logs: Vec<MachineLogRow>,
    pub spare_tools: Vec<SpareToolRow>,
}

pub(crate) const LOG_HEADERS: [&str; 7] = [
    "Machine Name",
    "Date",
    "Fuel (L)",
    "Hours Worked",
    "Supervisor",
    "Notes",
    "Has Photo",
];

pub(crate) const TOOL_HEADERS: [&str; 4] = ["Category", "Item Name", "Quantity", "Managed By"];

/// A typed spreadsheet cell.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Cell {
    Text(String),
    Number(f64),
    /// `YYYY-MM-DD`, written as a real date when it parses
    Date(String),
}

impl MachineLogRow {
    pub(crate) fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.machine_name.clone()),
            Cell::Date(self.date.clone()),
            Cell::Number(self.fuel),
            Cell::Number(self.hours),
            Cell::Text(self.supervisor.clone()),
            Cell::Text(self.notes.clone()),
            Cell::Text(self.has_photo.clone()),
        ]
    }
}

impl SpareToolRow {
    pub(crate) fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.category.clone()),
            Cell::Text(self.item_name.clone()),
            Cell::Number(self.quantity as f64),
            Cell::Text(self.managed_by.clone()),
        ]
    }
}

impl ReportData {
    /// Flatten the snapshot into report rows, in stored order.
    pub fn from_state(state: &AppState) -> Self {
        let machine_logs = state
            .logs
            .iter()
            .map(|l| MachineLogRow {
                machine_name: l.machine_name.clone(),
                date: l.date.clone(),
                fuel: l.fuel_used,
                hours: l.hours_worked,
                supervisor: l.supervisor_name.clone(),
                notes: l.notes.clone(),
                has_photo: yes_no(l.has_photo()).to_string(),
            })
            .collect();

        let spare_tools = state
            .spare_tools
            .iter()
            .flat_map(|cat| {
                let managed_by = state
                    .user_name(&cat.supervisor_id)
                    .unwrap_or("Unknown")
                    .to_string();
                cat.items.iter().map(move |item| SpareToolRow {
                    category: cat.name.clone(),
                    item_name: item.name.clone(),
                    quantity: item.quantity,
                    managed_by: managed_by.clone(),
                })
            })
            .collect();

        Self {
            machine_logs,
            spare_tools,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.machine_logs.is_empty() && self.spare_tools.is_empty()
    }
}
