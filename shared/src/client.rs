//! Client-related types shared between server and client
//!
//! Request/response types used in API communication.

use serde::{Deserialize, Serialize};

use crate::models::{User, UserRole};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub activation_key: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque session string; nothing verifies it
    pub token: String,
    pub user: UserInfo,
    /// Set when the development bypass key was used
    #[serde(default)]
    pub dev_mode: bool,
}

/// User information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub name: String,
    pub role: UserRole,
    pub email: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            role: user.role,
            email: user.email.clone(),
        }
    }
}

// =============================================================================
// Query DTOs
// =============================================================================

/// `GET /api/sales` query string
///
/// `limit` is kept as text so that malformed values fall back to the
/// default page size instead of rejecting the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SalesQuery {
    pub limit: Option<String>,
}

impl SalesQuery {
    pub fn limit_or(&self, default: usize) -> usize {
        self.limit
            .as_deref()
            .and_then(|l| l.trim().parse::<usize>().ok())
            .filter(|l| *l > 0)
            .unwrap_or(default)
    }
}
