//! Store error handling
//!
//! Every failure in the store is a returned value; nothing here is fatal.

use thiserror::Error;

use crate::models::{LinkId, UserId};

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Entity id or username does not exist
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// Registration conflict
    #[error("Username already exists: {0}")]
    UsernameTaken(String),

    /// A required field was empty
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unknown username or wrong password
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The user does not own the link
    #[error("User {user_id} does not own link {link_id}")]
    Forbidden { link_id: LinkId, user_id: UserId },

    /// bcrypt failed to hash or verify
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl StoreError {
    pub(crate) fn user_not_found(key: impl ToString) -> Self {
        StoreError::NotFound {
            entity: "User",
            key: key.to_string(),
        }
    }

    pub(crate) fn link_not_found(id: LinkId) -> Self {
        StoreError::NotFound {
            entity: "Link",
            key: id.to_string(),
        }
    }

    /// Check if this error means the entity is absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
