use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpareToolItem {
    pub id: String,
    pub name: String,
    /// Not bounded below: counts may go negative.
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpareToolCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<SpareToolItem>,
    pub supervisor_id: String,
}

impl SpareToolCategory {
    pub fn item_mut(&mut self, item_id: &str) -> Option<&mut SpareToolItem> {
        self.items.iter_mut().find(|i| i.id == item_id)
    }
}
