//! Account route handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::services::AuthService;
use crate::state::AppState;

/// Request body for account registration.
///
/// The display name travels as `username`, the field name storefront
/// clients already send.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response carrying a freshly issued identity token.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub success: bool,
    pub token: String,
}

/// `POST /signup` - register a new account.
pub async fn signup(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let token = AuthService::new(state.db(), state.tokens())
        .signup(&request.username, &request.email, &request.password)
        .await?;

    tracing::info!(email = %request.email, "account created");

    Ok(Json(TokenResponse {
        success: true,
        token,
    }))
}

/// `POST /login` - authenticate an existing account.
pub async fn login(
    State(state): State<AppState>,
    payload: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let token = AuthService::new(state.db(), state.tokens())
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(TokenResponse {
        success: true,
        token,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_uses_username_field() {
        let request: SignupRequest = serde_json::from_str(
            r#"{"username": "alice", "email": "alice@x.com", "password": "pw1"}"#,
        )
        .unwrap();

        assert_eq!(request.username, "alice");
        assert_eq!(request.email, "alice@x.com");
    }

    #[test]
    fn test_signup_request_rejects_missing_password() {
        let result: std::result::Result<SignupRequest, _> =
            serde_json::from_str(r#"{"username": "alice", "email": "alice@x.com"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_token_response_shape() {
        let response = TokenResponse {
            success: true,
            token: "abc".to_owned(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["token"], "abc");
    }
}
