//! Unified error handling.
//!
//! Provides a unified `AppError` type returned by all route handlers.
//! Every failure becomes a JSON body with a `success: false` flag and an
//! `errors` message. Authentication failures are the only errors carrying
//! a non-200 status (401); everything else reports through the success
//! flag alone, which is what existing storefront clients expect.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::{AuthError, CartError, TokenError};

/// Application-level error type for the storefront API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication middleware failure (missing/invalid token).
    #[error("auth error: {0}")]
    Token(#[from] TokenError),

    /// Signup/login failure.
    #[error("account error: {0}")]
    Auth(#[from] AuthError),

    /// Cart operation failure.
    #[error("cart error: {0}")]
    Cart(#[from] CartError),

    /// Malformed or incomplete request payload.
    #[error("validation error: {0}")]
    Validation(String),

    /// Database operation failed.
    #[error("database error: {0}")]
    Database(#[from] RepositoryError),

    /// File upload failed.
    #[error("upload error: {0}")]
    Upload(String),
}

/// JSON body carried by every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    errors: String,
}

impl AppError {
    /// Whether this error is worth a server-side error log entry.
    const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Database(_)
                | Self::Upload(_)
                | Self::Auth(AuthError::Repository(_) | AuthError::PasswordHash | AuthError::Token(_))
                | Self::Cart(CartError::Repository(_))
        )
    }

    /// The message shown to the client.
    ///
    /// Internal failures get a generic message; their details go to the
    /// log, not the response.
    fn client_message(&self) -> String {
        if self.is_internal() {
            return "internal server error".to_owned();
        }

        match self {
            Self::Token(_) => "Please authenticate using a valid token".to_owned(),
            Self::Auth(err) => err.to_string(),
            Self::Cart(err) => err.to_string(),
            Self::Validation(message) => message.clone(),
            Self::Database(_) | Self::Upload(_) => "internal server error".to_owned(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            tracing::error!(error = %self, "request error");
        }

        let status = match &self {
            Self::Token(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::OK,
        };

        let body = ErrorBody {
            success: false,
            errors: self.client_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
