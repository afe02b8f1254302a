use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MIN_CREDENTIAL_LEN;
use crate::error::DomainError;

/// User entity - an account that can post blogs.
///
/// The blogs a user owns are not stored on the user; they are the blogs whose
/// `user_id` points here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamps.
    pub fn new(username: String, name: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            name,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Registration input, prior to hashing.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
}

/// Registration input that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedUser {
    pub username: String,
    pub name: String,
    pub password: String,
}

impl NewUser {
    /// Check the registration fields in the order clients see the errors.
    pub fn validate(self) -> Result<ValidatedUser, DomainError> {
        let username = match self.username {
            Some(u) if !u.is_empty() => u,
            _ => return Err(DomainError::Validation("username missing".to_string())),
        };
        if username.chars().count() < MIN_CREDENTIAL_LEN {
            return Err(DomainError::Validation(format!(
                "username must be at least {MIN_CREDENTIAL_LEN} characters long"
            )));
        }

        let password = match self.password {
            Some(p) if !p.is_empty() => p,
            _ => return Err(DomainError::Validation("password missing".to_string())),
        };
        if password.chars().count() < MIN_CREDENTIAL_LEN {
            return Err(DomainError::Validation(format!(
                "password must be at least {MIN_CREDENTIAL_LEN} characters long"
            )));
        }

        let name = match self.name {
            Some(n) if !n.trim().is_empty() => n,
            _ => return Err(DomainError::Validation("name missing".to_string())),
        };

        Ok(ValidatedUser {
            username,
            name,
            password,
        })
    }
}
