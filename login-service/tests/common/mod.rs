use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use auth::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use login_service::domain::user::models::NewUser;
use login_service::domain::user::models::User;
use login_service::domain::user::models::UserId;
use login_service::domain::user::models::Username;
use login_service::domain::user::ports::UserRepository;
use login_service::domain::user::service::UserService;
use login_service::inbound::http::router::create_router;
use login_service::user::errors::UserError;
use tokio::sync::RwLock;
use tower::util::ServiceExt;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TEST_JWT_EXPIRATION_MINUTES: i64 = 30;

/// In-memory user store keyed by username.
///
/// Stands in for the Postgres adapter so the full HTTP stack runs inside a
/// test process. Enforces the same uniqueness rule the database does: a
/// duplicate save fails with `Conflict` and assigns nothing.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.get(username.as_str()).cloned())
    }

    async fn exists_by_username(&self, username: &Username) -> Result<bool, UserError> {
        let users = self.users.read().await;
        Ok(users.contains_key(username.as_str()))
    }

    async fn save(&self, user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.contains_key(user.username.as_str()) {
            return Err(UserError::Conflict(user.username.as_str().to_string()));
        }

        let user = User {
            id: UserId(Uuid::new_v4()),
            username: user.username,
            password_hash: user.password_hash,
            full_name: user.full_name,
            role: user.role,
        };
        users.insert(user.username.as_str().to_string(), user.clone());

        Ok(user)
    }
}

/// User store whose every operation fails, for driving the infrastructure
/// error path through the full HTTP stack.
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn find_by_username(&self, _username: &Username) -> Result<Option<User>, UserError> {
        Err(UserError::Database("connection refused".to_string()))
    }

    async fn exists_by_username(&self, _username: &Username) -> Result<bool, UserError> {
        Err(UserError::Database("connection refused".to_string()))
    }

    async fn save(&self, _user: NewUser) -> Result<User, UserError> {
        Err(UserError::Database("connection refused".to_string()))
    }
}

/// Test application that dispatches requests straight into the router
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Build the full application over an in-memory store
    pub fn new() -> Self {
        Self::with_repository(Arc::new(InMemoryUserRepository::new()))
    }

    /// Build the full application over the given user store
    pub fn with_repository<UR>(user_repository: Arc<UR>) -> Self
    where
        UR: UserRepository,
    {
        let user_service = Arc::new(UserService::new(user_repository));
        let token_issuer = Arc::new(TokenIssuer::new(
            TEST_JWT_SECRET,
            TEST_JWT_EXPIRATION_MINUTES,
        ));

        let router = create_router(user_service, token_issuer);

        Self { router }
    }

    /// Helper to make a JSON POST request and parse the JSON response
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let json = serde_json::from_slice(&bytes).expect("Failed to parse response");

        (status, json)
    }
}
