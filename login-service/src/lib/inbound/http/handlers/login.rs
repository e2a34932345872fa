use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;
use crate::user::models::Username;

pub async fn login<S: UserServicePort>(
    State(state): State<AppState<S>>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // A username that fails validation cannot belong to any stored user,
    // so it gets the same response as an unknown one.
    let username = Username::new(body.username).map_err(|_| ApiError::from(UserError::NotFound))?;

    // Verify credentials against the store
    let user = state
        .user_service
        .authenticate(&username, &body.password)
        .await
        .map_err(ApiError::from)?;

    // Issue a signed token for the verified user
    let token = state
        .token_issuer
        .issue(user.username.as_str(), &user.role)
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {}", e)))?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            username: user.username.as_str().to_string(),
            token,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub username: String,
    pub token: String,
}
