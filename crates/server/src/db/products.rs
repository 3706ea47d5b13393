//! Product repository.
//!
//! Products carry a server-assigned numeric id separate from the document
//! `_id`; assignment is max-existing-plus-one. Listing order is storage
//! (insertion) order, which the catalog endpoints depend on.

use bson::doc;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use serde::{Deserialize, Serialize};

use thaam_core::ProductId;

use super::{Db, RepositoryError};
use crate::models::{NewProduct, Product};

/// How many records the new-collections listing returns at most.
const NEW_COLLECTION_LIMIT: usize = 8;

/// How many records a popular-in-category listing returns at most.
const POPULAR_LIMIT: i64 = 4;

/// BSON document shape of a product record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDocument {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub category: String,
    pub new_price: f64,
    pub old_price: f64,
    #[serde(
        rename = "createdAt",
        with = "bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub created_at: DateTime<Utc>,
    pub available: bool,
}

impl From<ProductDocument> for Product {
    fn from(document: ProductDocument) -> Self {
        Self {
            id: ProductId::new(document.id),
            name: document.name,
            image: document.image,
            category: document.category,
            new_price: document.new_price,
            old_price: document.old_price,
            created_at: document.created_at,
            available: document.available,
        }
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    db: &'a Db,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(db: &'a Db) -> Self {
        Self { db }
    }

    /// Insert a new product with the next available id.
    ///
    /// The id is (max existing id) + 1, or 1 when the store is empty.
    /// `created_at` defaults to now and `available` to true.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn insert(&self, new_product: NewProduct) -> Result<Product, RepositoryError> {
        let last = self
            .db
            .products()
            .find_one(doc! {})
            .sort(doc! { "id": -1 })
            .await?;

        let id = next_product_id(last.map(|document| ProductId::new(document.id)));

        let document = ProductDocument {
            id: id.get(),
            name: new_product.name,
            image: new_product.image,
            category: new_product.category,
            new_price: new_product.new_price,
            old_price: new_product.old_price,
            created_at: Utc::now(),
            available: true,
        };

        self.db.products().insert_one(&document).await?;

        Ok(document.into())
    }

    /// Delete the product with the given id.
    ///
    /// Deleting an absent id is success: the operation is idempotent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        self.db.products().delete_one(doc! { "id": id.get() }).await?;
        Ok(())
    }

    /// All products, in storage order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn all(&self) -> Result<Vec<Product>, RepositoryError> {
        let documents: Vec<ProductDocument> =
            self.db.products().find(doc! {}).await?.try_collect().await?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    /// The new-collections listing: drop the very first record overall,
    /// then take the last 8 of the remainder.
    ///
    /// With fewer than 9 records this yields fewer than 8 results. The
    /// window is storage-order dependent.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn new_collections(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = self.all().await?;
        Ok(new_collection_window(products))
    }

    /// The first 4 products matching `category`, in storage order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn popular(&self, category: &str) -> Result<Vec<Product>, RepositoryError> {
        let documents: Vec<ProductDocument> = self
            .db
            .products()
            .find(doc! { "category": category })
            .limit(POPULAR_LIMIT)
            .await?
            .try_collect()
            .await?;

        Ok(documents.into_iter().map(Into::into).collect())
    }
}

/// The id to assign after `last`, the current maximum (None when empty).
fn next_product_id(last: Option<ProductId>) -> ProductId {
    last.map_or(ProductId::FIRST, |id| id.next())
}

/// Drop the first element, then keep the trailing `NEW_COLLECTION_LIMIT`.
fn new_collection_window(mut products: Vec<Product>) -> Vec<Product> {
    if products.is_empty() {
        return products;
    }

    products.remove(0);
    let start = products.len().saturating_sub(NEW_COLLECTION_LIMIT);
    products.split_off(start)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("product-{id}"),
            image: String::new(),
            category: "women".to_owned(),
            new_price: 10.0,
            old_price: 20.0,
            created_at: Utc::now(),
            available: true,
        }
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_next_product_id_empty_store() {
        assert_eq!(next_product_id(None), ProductId::FIRST);
    }

    #[test]
    fn test_next_product_id_increments_max() {
        assert_eq!(next_product_id(Some(ProductId::new(1))), ProductId::new(2));
        assert_eq!(
            next_product_id(Some(ProductId::new(41))),
            ProductId::new(42)
        );
    }

    #[test]
    fn test_new_collection_window_empty() {
        assert!(new_collection_window(Vec::new()).is_empty());
    }

    #[test]
    fn test_new_collection_window_single_record() {
        // The very first record is always dropped.
        let window = new_collection_window(vec![product(1)]);
        assert!(window.is_empty());
    }

    #[test]
    fn test_new_collection_window_fewer_than_nine() {
        let products = (1..=5).map(product).collect();
        let window = new_collection_window(products);
        assert_eq!(ids(&window), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_new_collection_window_exactly_nine() {
        let products = (1..=9).map(product).collect();
        let window = new_collection_window(products);
        assert_eq!(ids(&window), vec![2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_new_collection_window_many_records() {
        let products = (1..=20).map(product).collect();
        let window = new_collection_window(products);
        // Last 8 of the remainder, not the last 8 overall minus one.
        assert_eq!(ids(&window), vec![13, 14, 15, 16, 17, 18, 19, 20]);
    }
}
