use crate::error::AppError;
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// User account
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct User {
    /// Unique identifier of the user
    pub id: u64,
    /// Display name
    pub name: String,
    /// Login email address
    pub email: String,
    /// URL slug
    pub slug: String,
    /// Identifier used by LDAP/SAML/OIDC logins
    pub external_auth_id: String,
    /// Creation timestamp
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    pub updated_at: Option<DateTime<Utc>>,
    /// Last time the user did something in the system
    pub last_activity_at: Option<DateTime<Utc>>,
    /// Public profile URL
    pub profile_url: String,
    /// Admin edit URL
    pub edit_url: String,
    /// Avatar image URL
    pub avatar_url: String,
    /// Roles assigned to the user
    pub roles: Vec<Role>,
}

/// Role reference attached to a user
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Role {
    /// Role ID
    pub id: u64,
    /// Human readable role name
    pub display_name: String,
}

/// Short user reference embedded in detailed entities
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct EntityUser {
    /// User ID
    pub id: u64,
    /// Display name
    pub name: String,
    /// URL slug
    pub slug: String,
}

/// Body of a user create or update
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct UserRequest {
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Login email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Identifier used by external authentication
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_auth_id: Option<String>,
    /// Interface language code, e.g. `en`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Password, at least 8 characters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Role IDs replacing the current ones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<u64>>,
    /// Send an invitation email instead of setting a password (create only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_invite: Option<bool>,
}

impl UserRequest {
    /// Creates a request for a new user
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Sets the password
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the roles
    #[must_use]
    pub fn roles(mut self, roles: Vec<u64>) -> Self {
        self.roles = Some(roles);
        self
    }

    /// Sets the interface language
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the external authentication ID
    #[must_use]
    pub fn external_auth_id(mut self, id: impl Into<String>) -> Self {
        self.external_auth_id = Some(id.into());
        self
    }

    /// Asks the server to email an invitation
    #[must_use]
    pub fn send_invite(mut self, send: bool) -> Self {
        self.send_invite = Some(send);
        self
    }

    /// Checks the fields required to create a user
    pub fn validate_create(&self) -> Result<(), AppError> {
        match (&self.name, &self.email) {
            (Some(name), Some(email)) if !name.trim().is_empty() && email.contains('@') => {}
            _ => {
                return Err(AppError::InvalidInput(
                    "a new user needs a name and a valid email".to_string(),
                ));
            }
        }
        self.validate_password()
    }

    /// Checks the fields present in an update
    pub fn validate_update(&self) -> Result<(), AppError> {
        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(AppError::InvalidInput(format!("invalid email: {email}")));
            }
        }
        self.validate_password()
    }

    fn validate_password(&self) -> Result<(), AppError> {
        match &self.password {
            Some(password) if password.chars().count() < 8 => Err(AppError::InvalidInput(
                "password must be at least 8 characters".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

/// Body of a user delete
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub(crate) struct UserDeleteRequest {
    pub migrate_ownership_id: u64,
}
