use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::models::DEFAULT_ROLE;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for authentication and registration.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    ///
    /// # Returns
    /// Configured user service instance
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn authenticate(&self, username: &Username, password: &str) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFound)?;

        if !self.password_hasher.verify(password, &user.password_hash) {
            return Err(UserError::BadCredential);
        }

        Ok(user)
    }

    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        // Early check for a friendly failure; the store still enforces
        // uniqueness on save, which closes the race between the two.
        if self
            .repository
            .exists_by_username(&command.username)
            .await?
        {
            return Err(UserError::Conflict(command.username.to_string()));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let user = NewUser {
            username: command.username,
            password_hash,
            full_name: command.full_name,
            role: DEFAULT_ROLE.to_string(),
        };

        self.repository.save(user).await
    }
}
