use serde::Deserialize;
use serde::Serialize;

/// Claims carried by an issued token.
///
/// Exactly what the service embeds and nothing more: the subject, a custom
/// `role` claim, and the issued-at/expiry pair (RFC 7519 `iat`/`exp`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Role tag, carried as a custom claim
    pub role: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}
