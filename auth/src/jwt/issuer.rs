use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::JwtError;

/// Issues signed, time-bounded tokens.
///
/// Uses HS256 (HMAC with SHA-256); the secret and token lifetime are fixed
/// at construction rather than looked up from ambient configuration.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
    expiration_minutes: i64,
}

impl TokenIssuer {
    /// Create a new token issuer.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing secret (should be stored securely)
    /// * `expiration_minutes` - Token lifetime in minutes
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], expiration_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            expiration_minutes,
        }
    }

    /// Issue a signed token for a subject.
    ///
    /// The token carries `sub` = subject, `role` = role, `iat` = now and
    /// `exp` = now + the configured lifetime.
    ///
    /// # Arguments
    /// * `subject` - Identity the token asserts
    /// * `role` - Role tag embedded as the `role` claim
    ///
    /// # Returns
    /// Encoded JWT string
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str, role: &str) -> Result<String, JwtError> {
        let now = Utc::now();
        let expires_at = now + Duration::minutes(self.expiration_minutes);

        let claims = Claims {
            sub: subject.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }
}
