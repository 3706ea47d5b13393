//! User repository.
//!
//! Users embed their cart directly in the account document. Cart mutation
//! is a per-key atomic update, so concurrent increments for the same user
//! both land and a decrement can never drive a quantity negative.

use bson::oid::ObjectId;
use bson::{Document, doc};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use thaam_core::{Email, ItemId};

use super::{Db, RepositoryError};
use crate::models::{CartMap, seeded_cart};

/// BSON document shape of a user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub email: String,
    /// Argon2id hash in PHC string format.
    pub password: String,
    #[serde(rename = "cartData")]
    pub cart_data: CartMap,
    #[serde(
        rename = "createdAt",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub created_at: DateTime<Utc>,
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    db: &'a Db,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// Look up a user by email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserDocument>, RepositoryError> {
        Ok(self.db.users().find_one(doc! { "email": email }).await?)
    }

    /// Create a user with a freshly seeded zero-quantity cart.
    ///
    /// Returns the new user's id. Email uniqueness is checked by the
    /// caller before insertion.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(
        &self,
        name: &str,
        email: &Email,
        password_hash: &str,
    ) -> Result<ObjectId, RepositoryError> {
        let document = UserDocument {
            id: ObjectId::new(),
            name: name.to_owned(),
            email: email.as_str().to_owned(),
            password: password_hash.to_owned(),
            cart_data: seeded_cart(),
            created_at: Utc::now(),
        };

        self.db.users().insert_one(&document).await?;

        Ok(document.id)
    }

    /// The stored cart map for a user, or None if the user is unknown.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn cart(&self, user_id: ObjectId) -> Result<Option<CartMap>, RepositoryError> {
        Ok(self
            .db
            .users()
            .find_one(doc! { "_id": user_id })
            .await?
            .map(|user| user.cart_data))
    }

    /// Atomically increment a cart slot by 1.
    ///
    /// A slot outside the seeded range is created on first increment.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn increment_cart_slot(
        &self,
        user_id: ObjectId,
        item: ItemId,
    ) -> Result<(), RepositoryError> {
        let mut slot = Document::new();
        slot.insert(cart_field(item), 1_i64);

        self.db
            .users()
            .update_one(doc! { "_id": user_id }, doc! { "$inc": slot })
            .await?;

        Ok(())
    }

    /// Atomically decrement a cart slot by 1, only if its quantity is
    /// positive.
    ///
    /// The guard is part of the update filter, so the quantity cannot go
    /// negative even under concurrent decrements. A decrement that matches
    /// no document (zero quantity, absent slot, unknown user) is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn decrement_cart_slot(
        &self,
        user_id: ObjectId,
        item: ItemId,
    ) -> Result<(), RepositoryError> {
        let field = cart_field(item);

        let mut filter = doc! { "_id": user_id };
        filter.insert(field.clone(), doc! { "$gt": 0_i64 });

        let mut slot = Document::new();
        slot.insert(field, -1_i64);

        self.db
            .users()
            .update_one(filter, doc! { "$inc": slot })
            .await?;

        Ok(())
    }
}

/// Dotted field path of a cart slot inside the user document.
fn cart_field(item: ItemId) -> String {
    format!("cartData.{}", item.key())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_field_path() {
        assert_eq!(cart_field(ItemId::new(5)), "cartData.5");
        assert_eq!(cart_field(ItemId::new(299)), "cartData.299");
    }

    #[test]
    fn test_user_document_field_names() {
        let document = UserDocument {
            id: ObjectId::new(),
            name: "alice".to_owned(),
            email: "alice@x.com".to_owned(),
            password: "$argon2id$...".to_owned(),
            cart_data: seeded_cart(),
            created_at: Utc::now(),
        };

        let bson = bson::to_document(&document).unwrap();
        assert!(bson.contains_key("_id"));
        assert!(bson.contains_key("cartData"));
        assert!(bson.contains_key("createdAt"));
        assert!(!bson.contains_key("cart_data"));
    }
}
