//! Account service.
//!
//! Handles signup and login, issuing an identity token on success.
//! Passwords are stored as argon2id hashes; a login compares the supplied
//! password against the hash, never against stored plaintext.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use thaam_core::Email;

use crate::db::{Db, UserRepository};
use crate::services::token::TokenService;

/// Account signup and login.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Create a new account service.
    #[must_use]
    pub const fn new(db: &'a Db, tokens: &'a TokenService) -> Self {
        Self {
            users: UserRepository::new(db),
            tokens,
        }
    }

    /// Register a new account and return a token for it.
    ///
    /// The new account starts with a fully seeded zero-quantity cart.
    /// Nothing is persisted when the email is already taken.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::DuplicateEmail` if the email is already registered.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<String, AuthError> {
        let email = Email::parse(email)?;

        if self.users.find_by_email(email.as_str()).await?.is_some() {
            return Err(AuthError::DuplicateEmail);
        }

        let password_hash = hash_password(password)?;
        let user_id = self.users.insert(name, &email, &password_hash).await?;

        Ok(self.tokens.issue(user_id)?)
    }

    /// Log in with email and password, returning a token for the account.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password is wrong.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        // A malformed email cannot belong to any account.
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .users
            .find_by_email(email.as_str())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &user.password)?;

        Ok(self.tokens.issue(user.id)?)
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("pw1").unwrap();
        assert!(verify_password("pw1", &hash).is_ok());
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("pw1").unwrap();
        assert!(matches!(
            verify_password("pw2", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("pw1").unwrap();
        let second = hash_password("pw1").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_garbage_hash_is_invalid_credentials() {
        assert!(matches!(
            verify_password("pw1", "not-a-phc-string"),
            Err(AuthError::InvalidCredentials)
        ));
    }
}
