//! User Model

use serde::{Deserialize, Serialize};

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    #[serde(other)]
    Other,
}

fn default_true() -> bool {
    true
}

/// User entity (read-only to the server)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    /// Compared case-sensitively at login
    pub activation_key: String,
    /// Records without the flag count as active
    #[serde(default = "default_true")]
    pub active: bool,
}
