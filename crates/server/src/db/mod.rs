//! Database access for the storefront MongoDB instance.
//!
//! # Collections
//!
//! - `products` - catalog records with server-assigned numeric ids
//! - `users` - accounts with embedded cart maps
//!
//! The database handle is constructed once at startup and injected through
//! [`crate::state::AppState`]; nothing here touches global state.

pub mod products;
pub mod users;

pub use products::ProductRepository;
pub use users::UserRepository;

use mongodb::{Client, Collection, Database};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use products::ProductDocument;
use users::UserDocument;

/// Database used when the connection string does not name one.
const DEFAULT_DATABASE: &str = "ecommerce";

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The driver reported a failure.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Handle to the storefront database.
///
/// Cheap to clone; repositories borrow it per request.
#[derive(Clone)]
pub struct Db {
    database: Database,
}

impl Db {
    /// Connect to MongoDB and select the storefront database.
    ///
    /// Uses the database named in the connection string, falling back to
    /// `ecommerce` when the string does not name one.
    ///
    /// # Errors
    ///
    /// Returns `mongodb::error::Error` if the connection string is invalid
    /// or the server cannot be reached.
    pub async fn connect(connection_string: &SecretString) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(connection_string.expose_secret()).await?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));

        Ok(Self { database })
    }

    /// The `products` collection.
    pub(crate) fn products(&self) -> Collection<ProductDocument> {
        self.database.collection("products")
    }

    /// The `users` collection.
    pub(crate) fn users(&self) -> Collection<UserDocument> {
        self.database.collection("users")
    }
}
