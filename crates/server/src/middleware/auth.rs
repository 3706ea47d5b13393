//! Authentication extractor.
//!
//! Provides an extractor for requiring an authenticated identity in route
//! handlers. The token travels in the `auth-token` request header.

use axum::{extract::FromRequestParts, http::request::Parts};
use bson::oid::ObjectId;

use crate::error::AppError;
use crate::services::TokenError;
use crate::state::AppState;

/// Name of the request header carrying the identity token.
pub const AUTH_TOKEN_HEADER: &str = "auth-token";

/// Extractor that requires a verified identity token.
///
/// A missing or unverifiable token rejects the request with 401 before the
/// handler runs.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     AuthUser(user_id): AuthUser,
/// ) -> impl IntoResponse {
///     format!("hello, {user_id}")
/// }
/// ```
pub struct AuthUser(pub ObjectId);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(TokenError::Missing)?;

        let user = state.tokens().verify(token)?;

        Ok(Self(user.object_id()?))
    }
}
