//! User collection DTOs and migrations.

use crate::migration::{MigrationChain, SchemaMigration};
use anyhow::Result;
use semver::Version;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use sattva_core::user::{Preferences, User};

/// Latest user-set schema version.
pub const USER_SET_VERSION: &str = "1.1.0";

/// User record V1.0.0 (initial version, no preferences).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecordV1_0 {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// User record V1.1.0 (added theme preferences).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecordV1_1 {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub preferences: PreferencesV1,
}

/// Theme preference payload. Stored as a raw label; unknown labels fall
/// back to the default theme rather than failing the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesV1 {
    #[serde(default = "default_theme")]
    pub theme: String,
}

impl Default for PreferencesV1 {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

fn default_theme() -> String {
    "light".to_string()
}

/// User collection envelope V1.0.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSetV1_0 {
    pub schema_version: String,
    pub users: Vec<UserRecordV1_0>,
}

/// User collection envelope V1.1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSetV1_1 {
    pub schema_version: String,
    pub users: Vec<UserRecordV1_1>,
}

/// Type alias for the latest user-set envelope.
pub type UserSetDto = UserSetV1_1;

impl UserSetV1_1 {
    /// Builds the persistable envelope from domain users.
    pub fn from_users(users: &[User]) -> Self {
        Self {
            schema_version: USER_SET_VERSION.to_string(),
            users: users.iter().map(UserRecordV1_1::from).collect(),
        }
    }

    /// Converts the envelope into domain users.
    pub fn into_users(self) -> Vec<User> {
        self.users
            .into_iter()
            .map(UserRecordV1_1::into_domain)
            .collect()
    }
}

// ============================================================================
// Domain model conversions
// ============================================================================

impl From<&User> for UserRecordV1_1 {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            preferences: PreferencesV1 {
                theme: user.preferences.theme.to_string(),
            },
        }
    }
}

impl UserRecordV1_1 {
    pub fn into_domain(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            password: self.password,
            preferences: Preferences {
                theme: self.preferences.theme.parse().unwrap_or_default(),
            },
        }
    }
}

// ============================================================================
// Migrations
// ============================================================================

/// V1.0.0 → V1.1.0: adds `preferences` with the default (light) theme.
#[derive(Debug)]
struct AddThemePreferences;

impl SchemaMigration for AddThemePreferences {
    fn from_version(&self) -> Version {
        Version::new(1, 0, 0)
    }

    fn to_version(&self) -> Version {
        Version::new(1, 1, 0)
    }

    fn description(&self) -> &str {
        "add theme preferences to user records"
    }

    fn migrate(&self, value: Value) -> Result<Value> {
        let old: UserSetV1_0 = serde_json::from_value(value)?;
        let new = UserSetV1_1 {
            schema_version: self.to_version().to_string(),
            users: old
                .users
                .into_iter()
                .map(|u| UserRecordV1_1 {
                    id: u.id,
                    name: u.name,
                    email: u.email,
                    password: u.password,
                    preferences: PreferencesV1::default(),
                })
                .collect(),
        };
        Ok(serde_json::to_value(new)?)
    }
}

/// The migration chain for the user collection.
pub fn user_set_chain() -> MigrationChain {
    let mut chain = MigrationChain::new("user_set", Version::new(1, 1, 0));
    chain.register(Arc::new(AddThemePreferences));
    chain
}
