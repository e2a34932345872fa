use std::sync::Arc;
use std::time::Duration;

use auth::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::register::register;
use crate::domain::user::ports::UserServicePort;

pub struct AppState<S>
where
    S: UserServicePort,
{
    pub user_service: Arc<S>,
    pub token_issuer: Arc<TokenIssuer>,
}

// Manual impl: a derived Clone would demand S: Clone, which the Arc
// already makes unnecessary.
impl<S> Clone for AppState<S>
where
    S: UserServicePort,
{
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            token_issuer: Arc::clone(&self.token_issuer),
        }
    }
}

pub fn create_router<S>(user_service: Arc<S>, token_issuer: Arc<TokenIssuer>) -> Router
where
    S: UserServicePort,
{
    let state = AppState {
        user_service,
        token_issuer,
    };

    let auth_routes = Router::new()
        .route("/api/v1/auth/login", post(login::<S>))
        .route("/api/v1/auth/register", post(register::<S>));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
                headers = ?request.headers(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(auth_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
