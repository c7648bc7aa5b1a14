use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Owner,
    Supervisor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Owner => "OWNER",
            UserRole::Supervisor => "SUPERVISOR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
        }
    }

    /// Parse CLI input (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "ACTIVE" | "A" => Some(UserStatus::Active),
            "INACTIVE" | "I" => Some(UserStatus::Inactive),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    /// 4-digit login PIN
    pub pin: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub status: UserStatus,
}

impl User {
    pub fn is_owner(&self) -> bool {
        self.role == UserRole::Owner
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// The account every fresh store starts with.
    pub fn default_owner() -> Self {
        Self {
            id: "owner-1".to_string(),
            name: "Admin Owner".to_string(),
            username: "owner".to_string(),
            pin: "8888".to_string(),
            role: UserRole::Owner,
            phone: Some("+1234567890".to_string()),
            status: UserStatus::Active,
        }
    }
}
