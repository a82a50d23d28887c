//! Activation-key login
//!
//! Keys are compared as plain strings. The issued token is an opaque
//! session label; nothing checks it afterwards.
//!
//! When no active user holds the key, the configured development key and
//! the seeded admin key both fall through to a synthetic developer account.

use shared::client::{LoginResponse, UserInfo};
use shared::models::{User, UserRole};
use uuid::Uuid;

use crate::store::CollectionStore;
use crate::store::seed::SEED_ADMIN_KEY;
use crate::utils::{AppError, AppResult};

/// Id of the synthetic account returned for the development key
pub const DEV_USER_ID: i64 = 0;

#[derive(Clone, Debug)]
pub struct AuthService {
    store: CollectionStore,
    dev_bypass_key: Option<String>,
}

impl AuthService {
    pub fn new(store: CollectionStore, dev_bypass_key: Option<String>) -> Self {
        Self {
            store,
            dev_bypass_key,
        }
    }

    pub async fn login(&self, activation_key: &str) -> AppResult<LoginResponse> {
        let users: Vec<User> = self.store.load().await;

        if let Some(user) = users
            .iter()
            .find(|u| u.active && u.activation_key == activation_key)
        {
            tracing::info!(user_id = user.id, name = %user.name, "User logged in");
            return Ok(LoginResponse {
                token: issue_token(user.id),
                user: UserInfo::from(user),
                dev_mode: false,
            });
        }

        if self.is_bypass_key(activation_key) {
            tracing::warn!("Login with development bypass key");
            return Ok(LoginResponse {
                token: issue_token(DEV_USER_ID),
                user: developer(),
                dev_mode: true,
            });
        }

        tracing::warn!("Login failed - activation key matches no active user");
        Err(AppError::invalid_credentials())
    }

    fn is_bypass_key(&self, activation_key: &str) -> bool {
        activation_key == SEED_ADMIN_KEY
            || self
                .dev_bypass_key
                .as_deref()
                .is_some_and(|key| key == activation_key)
    }
}

fn issue_token(user_id: i64) -> String {
    format!("pos-{}-{}", user_id, Uuid::new_v4().simple())
}

fn developer() -> UserInfo {
    UserInfo {
        id: DEV_USER_ID,
        name: "Developer".to_string(),
        role: UserRole::Admin,
        email: "dev@pos.local".to_string(),
    }
}
