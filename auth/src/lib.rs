//! Authentication primitives library
//!
//! Reusable authentication infrastructure for services:
//! - Password hashing (Argon2id)
//! - JWT token issuance
//!
//! Services define their own domain traits and adapt these implementations;
//! nothing here knows about users, stores, or HTTP.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Token Issuance
//! ```
//! use auth::TokenIssuer;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!", 30);
//! let token = issuer.issue("alice", "USER").unwrap();
//! assert!(!token.is_empty());
//! ```
//!
//! This library issues tokens but never validates them: the issuing service
//! has no verification path of its own, and downstream consumers that need
//! one hold the same secret and decode with `jsonwebtoken` directly.

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenIssuer;
pub use password::PasswordError;
pub use password::PasswordHasher;
