//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::token::TokenError;

/// Errors that can occur during signup and login.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] thaam_core::EmailError),

    /// An account with this email already exists.
    #[error("existing user found with same email address")]
    DuplicateEmail,

    /// Unknown email or non-matching password.
    #[error("wrong email or password")]
    InvalidCredentials,

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Token issuance failed.
    #[error("token error: {0}")]
    Token(#[from] TokenError),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}
