//! Identity token issuance and verification.
//!
//! Tokens are HS256 JWTs whose claims embed the user id as
//! `{"user": {"id": "<hex id>"}}`, the shape clients already consume.
//! Tokens additionally carry `iat`/`exp`; expiry is 30 days.

use bson::oid::ObjectId;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Token lifetime.
const TOKEN_TTL_DAYS: i64 = 30;

/// Errors from token verification.
#[derive(Debug, Error)]
pub enum TokenError {
    /// No token was presented.
    #[error("missing authentication token")]
    Missing,

    /// The token is malformed, expired, or carries a bad signature.
    #[error("invalid authentication token")]
    Invalid,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(_: jsonwebtoken::errors::Error) -> Self {
        Self::Invalid
    }
}

/// JWT claims for storefront identity tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The asserted identity.
    pub user: TokenUser,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

/// The identity embedded in a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUser {
    /// Hex-encoded user document id.
    pub id: String,
}

impl TokenUser {
    /// Parse the embedded id back into an `ObjectId`.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` if the id is not a valid hex ObjectId.
    pub fn object_id(&self) -> Result<ObjectId, TokenError> {
        ObjectId::parse_str(&self.id).map_err(|_| TokenError::Invalid)
    }
}

/// Issues and verifies signed identity tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service from the signing secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let secret = secret.expose_secret().as_bytes();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Issue a token asserting `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` if signing fails.
    pub fn issue(&self, user_id: ObjectId) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            user: TokenUser {
                id: user_id.to_hex(),
            },
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Verify a token and return the identity it asserts.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` if the token is malformed, expired,
    /// or signed with a different secret.
    pub fn verify(&self, token: &str) -> Result<TokenUser, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default())?;
        Ok(data.claims.user)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service(secret: &str) -> TokenService {
        TokenService::new(&SecretString::from(secret.to_owned()))
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let tokens = service("roundtrip-secret-that-is-long-enough");
        let user_id = ObjectId::new();

        let token = tokens.issue(user_id).unwrap();
        let verified = tokens.verify(&token).unwrap();

        assert_eq!(verified.id, user_id.to_hex());
        assert_eq!(verified.object_id().unwrap(), user_id);
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let tokens = service("roundtrip-secret-that-is-long-enough");
        assert!(matches!(
            tokens.verify("not-a-token"),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let issuer = service("secret-one-that-is-long-enough!!");
        let verifier = service("secret-two-that-is-long-enough!!");

        let token = issuer.issue(ObjectId::new()).unwrap();
        assert!(matches!(verifier.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_claims_embed_user_id_shape() {
        let claims = Claims {
            user: TokenUser {
                id: "507f1f77bcf86cd799439011".to_owned(),
            },
            iat: 0,
            exp: i64::MAX,
        };

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["user"]["id"], "507f1f77bcf86cd799439011");
    }

    #[test]
    fn test_bad_object_id_in_claims() {
        let user = TokenUser {
            id: "not-hex".to_owned(),
        };
        assert!(matches!(user.object_id(), Err(TokenError::Invalid)));
    }
}
