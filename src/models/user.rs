//! User model
//!
//! A passive record for an application user. Credential hashing and session
//! management happen in the surrounding application layer; this record only
//! carries the fields and their validity rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;
use crate::error::{FintrackError, FintrackResult};
use crate::validation;

/// An application user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Email address used as the login identifier
    pub email: String,

    /// Display name shown in the UI
    #[serde(default)]
    pub display_name: String,

    /// Opaque password hash produced by the auth layer
    pub password_hash: String,

    /// When the user was created
    pub created_at: DateTime<Utc>,

    /// When the user was last modified
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user record
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            email: email.into(),
            display_name: String::new(),
            password_hash: password_hash.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the display name
    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = name.into();
        self.updated_at = Utc::now();
    }

    /// Validate the record's fields
    pub fn validate(&self) -> FintrackResult<()> {
        if !validation::validate_email(&self.email) {
            return Err(FintrackError::invalid_field(
                "email",
                format!("'{}' is not a valid email address", self.email),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.display_name.is_empty() {
            write!(f, "{}", self.email)
        } else {
            write!(f, "{} <{}>", self.display_name, self.email)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new("alice@example.com", "hash");
        assert_eq!(user.email, "alice@example.com");
        assert!(user.display_name.is_empty());
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let user = User::new("not-an-email", "hash");
        let err = user.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("not-an-email"));
    }

    #[test]
    fn test_display() {
        let mut user = User::new("alice@example.com", "hash");
        assert_eq!(user.to_string(), "alice@example.com");

        user.set_display_name("Alice");
        assert_eq!(user.to_string(), "Alice <alice@example.com>");
    }

    #[test]
    fn test_serialization() {
        let user = User::new("alice@example.com", "hash");
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user.id, back.id);
        assert_eq!(user.email, back.email);
    }
}
