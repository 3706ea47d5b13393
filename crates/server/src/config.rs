//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MONGO_CONNECTION_STRING` - MongoDB connection string
//! - `JWT_SECRET` - Token signing secret (min 32 chars)
//!
//! ## Optional
//! - `HOST` - Bind address (default: 127.0.0.1)
//! - `PORT` - Listen port (default: 4000)
//! - `PUBLIC_BASE_URL` - Public URL prefix for uploaded image links
//!   (default: `http://localhost:4000`)
//! - `UPLOAD_DIR` - Directory uploaded images are stored in
//!   (default: `upload/images`)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use url::Url;

const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:4000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// MongoDB connection string (contains credentials)
    pub mongo_connection_string: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Token signing secret
    pub jwt_secret: SecretString,
    /// Public URL prefix for constructed image links
    pub public_base_url: Url,
    /// Directory uploaded images are stored in
    pub upload_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid,
    /// or if the signing secret is too short.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let mongo_connection_string =
            SecretString::from(get_required_env("MONGO_CONNECTION_STRING")?);

        let host = get_env_or_default("HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("PORT", "4000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_owned(), e.to_string()))?;

        let jwt_secret = SecretString::from(get_required_env("JWT_SECRET")?);
        validate_jwt_secret(&jwt_secret, "JWT_SECRET")?;

        let public_base_url = get_env_or_default("PUBLIC_BASE_URL", DEFAULT_PUBLIC_BASE_URL)
            .parse::<Url>()
            .map_err(|e| ConfigError::InvalidEnvVar("PUBLIC_BASE_URL".to_owned(), e.to_string()))?;

        let upload_dir = PathBuf::from(get_env_or_default("UPLOAD_DIR", "upload/images"));

        Ok(Self {
            mongo_connection_string,
            host,
            port,
            jwt_secret,
            public_base_url,
            upload_dir,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Validate that the token signing secret meets the minimum length.
fn validate_jwt_secret(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.len() < MIN_JWT_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_owned(),
            format!(
                "must be at least {} characters (got {})",
                MIN_JWT_SECRET_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_jwt_secret_too_short() {
        let secret = SecretString::from("short");
        let result = validate_jwt_secret(&secret, "TEST_SECRET");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_validate_jwt_secret_valid_length() {
        let secret = SecretString::from("x".repeat(32));
        assert!(validate_jwt_secret(&secret, "TEST_SECRET").is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            mongo_connection_string: SecretString::from("mongodb://localhost/ecommerce"),
            host: "127.0.0.1".parse().unwrap(),
            port: 4000,
            jwt_secret: SecretString::from("x".repeat(32)),
            public_base_url: Url::parse(DEFAULT_PUBLIC_BASE_URL).unwrap(),
            upload_dir: PathBuf::from("upload/images"),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 4000);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = ServerConfig {
            mongo_connection_string: SecretString::from("mongodb://user:hunter2@db/ecommerce"),
            host: "127.0.0.1".parse().unwrap(),
            port: 4000,
            jwt_secret: SecretString::from("super_secret_signing_key_value!!"),
            public_base_url: Url::parse(DEFAULT_PUBLIC_BASE_URL).unwrap(),
            upload_dir: PathBuf::from("upload/images"),
        };

        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("hunter2"));
        assert!(!debug_output.contains("super_secret_signing_key_value"));
    }
}
