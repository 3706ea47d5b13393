//! Cart service.
//!
//! Mutates a user's cart map under an authenticated identity. Both
//! mutations are single atomic document updates in the repository, so
//! concurrent requests for the same user cannot lose increments and a
//! quantity can never go negative.

use bson::oid::ObjectId;
use thiserror::Error;

use thaam_core::ItemId;

use crate::db::{Db, RepositoryError, UserRepository};
use crate::models::CartMap;

/// Errors from cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The authenticated user has no account document.
    #[error("user not found")]
    UserNotFound,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Cart mutation and retrieval for an authenticated user.
pub struct CartService<'a> {
    users: UserRepository<'a>,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(db: &'a Db) -> Self {
        Self {
            users: UserRepository::new(db),
        }
    }

    /// Increment the quantity of `item` by 1.
    ///
    /// Creates the slot if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Repository` if the update fails.
    pub async fn add(&self, user_id: ObjectId, item: ItemId) -> Result<(), CartError> {
        self.users.increment_cart_slot(user_id, item).await?;
        tracing::debug!(user = %user_id, item = %item, "cart slot incremented");
        Ok(())
    }

    /// Decrement the quantity of `item` by 1, if it is positive.
    ///
    /// A decrement at zero is a no-op, never an error.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Repository` if the update fails.
    pub async fn remove(&self, user_id: ObjectId, item: ItemId) -> Result<(), CartError> {
        self.users.decrement_cart_slot(user_id, item).await?;
        tracing::debug!(user = %user_id, item = %item, "cart slot decremented");
        Ok(())
    }

    /// The user's stored cart map.
    ///
    /// # Errors
    ///
    /// Returns `CartError::UserNotFound` if the user has no account.
    /// Returns `CartError::Repository` if the query fails.
    pub async fn cart(&self, user_id: ObjectId) -> Result<CartMap, CartError> {
        self.users
            .cart(user_id)
            .await?
            .ok_or(CartError::UserNotFound)
    }
}
