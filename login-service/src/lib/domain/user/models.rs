use std::fmt;

use uuid::Uuid;

use crate::user::errors::FullNameError;
use crate::user::errors::UsernameError;

/// Role assigned to every user at registration. No role-change operation
/// exists, so this is the only role the service ever writes.
pub const DEFAULT_ROLE: &str = "USER";

/// User aggregate entity.
///
/// Represents a registered user as the store persisted it; the id has
/// already been assigned. The `password_hash` field only ever holds the
/// hashed credential, never the raw secret.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password_hash: String,
    pub full_name: FullName,
    pub role: String,
}

/// A user record prior to persistence.
///
/// Carries no id at all: the store assigns one on save and returns the
/// completed [`User`].
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub password_hash: String,
    pub full_name: FullName,
    pub role: String,
}

/// User unique identifier type
///
/// Opaque to the domain; only the store mints these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Ensures the username is non-blank and at most 80 characters. Usernames
/// are case-sensitive and stored without normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 80;

    /// Create a new valid username.
    ///
    /// # Arguments
    /// * `username` - Raw username string
    ///
    /// # Returns
    /// Validated Username value object
    ///
    /// # Errors
    /// * `Blank` - Username is empty or whitespace only
    /// * `TooLong` - Username longer than 80 characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.trim().is_empty() {
            return Err(UsernameError::Blank);
        }
        if username.len() > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: username.len(),
            });
        }
        Ok(Self(username))
    }

    /// Get username as string slice.
    ///
    /// # Returns
    /// Username string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Display name value type
///
/// Free text, non-blank, at most 150 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    const MAX_LENGTH: usize = 150;

    /// Create a new validated display name.
    ///
    /// # Arguments
    /// * `full_name` - Raw display name string
    ///
    /// # Returns
    /// Validated FullName value object
    ///
    /// # Errors
    /// * `Blank` - Name is empty or whitespace only
    /// * `TooLong` - Name longer than 150 characters
    pub fn new(full_name: String) -> Result<Self, FullNameError> {
        if full_name.trim().is_empty() {
            return Err(FullNameError::Blank);
        }
        if full_name.len() > Self::MAX_LENGTH {
            return Err(FullNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: full_name.len(),
            });
        }
        Ok(Self(full_name))
    }

    /// Get the display name as string slice.
    ///
    /// # Returns
    /// Display name string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct RegisterUserCommand {
    pub username: Username,
    pub password: String,
    pub full_name: FullName,
}

impl RegisterUserCommand {
    /// Construct a new register user command.
    ///
    /// # Arguments
    /// * `username` - Validated username
    /// * `password` - Plain text password (will be hashed by the service)
    /// * `full_name` - Validated display name
    ///
    /// # Returns
    /// RegisterUserCommand with validated fields
    pub fn new(username: Username, password: String, full_name: FullName) -> Self {
        Self {
            username,
            password,
            full_name,
        }
    }
}
