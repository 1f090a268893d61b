//! User domain model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::result::ValidationError;

/// Youngest age the registry ever accepts, whatever the configuration says
pub const MINIMUM_AGE: u32 = 18;

/// Lifecycle status of a user record
///
/// A record starts `Active` and can only move to `Inactive`; there is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub is_admin: bool,
    pub status: UserStatus,
}

impl User {
    /// Build a validated, active record from a creation request
    ///
    /// Presence is checked before age, so an empty name with an underage
    /// value still reports missing fields.
    pub fn from_new(
        id: impl Into<String>,
        new_user: NewUser,
        minimum_age: u32,
    ) -> Result<Self, ValidationError> {
        let age = new_user.validate(minimum_age)?;
        Ok(Self {
            id: id.into(),
            name: new_user.name,
            email: new_user.email,
            age,
            is_admin: new_user.is_admin,
            status: UserStatus::Active,
        })
    }

    /// Generate a fresh random identifier
    pub fn generate_id() -> String {
        Uuid::new_v4().to_string()
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Mark the record inactive. Repeating this is a no-op.
    pub fn deactivate(&mut self) {
        self.status = UserStatus::Inactive;
    }
}

/// Input for creating a user
///
/// Every field is optional when deserialized so that incomplete payloads
/// surface as [`ValidationError::MissingFields`] instead of a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub is_admin: bool,
}

impl NewUser {
    /// Create a non-admin creation request
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: Some(age),
            is_admin: false,
        }
    }

    /// Set the admin flag
    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }

    /// Check presence, then age. Returns the accepted age.
    ///
    /// An age of zero counts as not provided. `minimum_age` can raise the
    /// bar but never lowers it below [`MINIMUM_AGE`].
    pub fn validate(&self, minimum_age: u32) -> Result<u32, ValidationError> {
        let age = match self.age {
            Some(age) if age > 0 && !self.name.is_empty() && !self.email.is_empty() => age,
            _ => return Err(ValidationError::MissingFields),
        };

        let minimum = minimum_age.max(MINIMUM_AGE);
        if age < minimum {
            return Err(ValidationError::Underage { minimum });
        }

        Ok(age)
    }
}
