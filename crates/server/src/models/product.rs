//! Product domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use thaam_core::ProductId;

/// A catalog product.
///
/// Products are immutable once created: the only lifecycle operations are
/// insertion (with a server-assigned id) and deletion by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Server-assigned id, unique and monotonically increasing.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL of the product image.
    pub image: String,
    /// Classification string used for filtered listings (e.g. "women").
    pub category: String,
    /// Current price.
    pub new_price: f64,
    /// Previous price, shown struck through.
    pub old_price: f64,
    /// When the product was added.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Whether the product is available for sale.
    pub available: bool,
}

/// Fields supplied by the client when adding a product.
///
/// Every field is required; a missing field is rejected at the JSON
/// boundary before any database work happens.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub image: String,
    pub category: String,
    pub new_price: f64,
    pub old_price: f64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_serializes_created_at_as_camel_case() {
        let product = Product {
            id: ProductId::new(1),
            name: "Shirt".to_owned(),
            image: "http://localhost:4000/images/shirt.png".to_owned(),
            category: "men".to_owned(),
            new_price: 35.0,
            old_price: 60.5,
            created_at: Utc::now(),
            available: true,
        };

        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
        assert_eq!(json["id"], 1);
        assert_eq!(json["new_price"], 35.0);
    }

    #[test]
    fn test_new_product_rejects_missing_fields() {
        let result: Result<NewProduct, _> = serde_json::from_str(r#"{"name": "Shirt"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_product_parses_complete_payload() {
        let new_product: NewProduct = serde_json::from_str(
            r#"{
                "name": "Shirt",
                "image": "http://localhost:4000/images/shirt.png",
                "category": "women",
                "new_price": 35.0,
                "old_price": 60.5
            }"#,
        )
        .unwrap();

        assert_eq!(new_product.name, "Shirt");
        assert_eq!(new_product.category, "women");
    }
}
