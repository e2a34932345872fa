use async_trait::async_trait;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for the authentication and registration flows.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Verify a username/password pair against the store.
    ///
    /// Unknown usernames and wrong passwords fail with distinct variants
    /// that present one identical message, so callers cannot tell which
    /// half of the check failed.
    ///
    /// # Arguments
    /// * `username` - Validated username to look up
    /// * `password` - Raw password to verify
    ///
    /// # Returns
    /// The full user record, hash included; outward mappings must not
    /// expose the hash
    ///
    /// # Errors
    /// * `NotFound` - No user with this username
    /// * `BadCredential` - Password does not match the stored hash
    /// * `Database` - Store operation failed
    async fn authenticate(&self, username: &Username, password: &str) -> Result<User, UserError>;

    /// Register a new user with a hashed credential and the default role.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, raw password,
    ///   and display name
    ///
    /// # Returns
    /// The persisted user, including the store-assigned id
    ///
    /// # Errors
    /// * `Conflict` - Username is already taken
    /// * `Password` - Hashing the password failed
    /// * `Database` - Store operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;
}

/// Persistence operations for user records.
///
/// The store is the authority on username uniqueness: `save` must reject a
/// duplicate with `Conflict` regardless of any earlier existence check.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve a user by username.
    ///
    /// # Arguments
    /// * `username` - Username to search for
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Check whether a username is already taken.
    ///
    /// # Arguments
    /// * `username` - Username to check
    ///
    /// # Returns
    /// True if a user with this username exists
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn exists_by_username(&self, username: &Username) -> Result<bool, UserError>;

    /// Persist a new user and assign its id.
    ///
    /// # Arguments
    /// * `user` - User record to persist (no id yet)
    ///
    /// # Returns
    /// The persisted user with the store-assigned id
    ///
    /// # Errors
    /// * `Conflict` - Username is already taken
    /// * `Database` - Store operation failed
    async fn save(&self, user: NewUser) -> Result<User, UserError>;
}
