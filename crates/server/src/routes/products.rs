//! Catalog route handlers.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use thaam_core::ProductId;

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::models::{NewProduct, Product};
use crate::state::AppState;

/// Category served by the popular listing endpoint.
const POPULAR_CATEGORY: &str = "women";

/// Request body for deleting a product.
#[derive(Debug, Deserialize)]
pub struct RemoveProductRequest {
    /// Server-assigned id of the product to delete.
    pub id: ProductId,
    /// Product name, echoed back to the caller if supplied.
    #[serde(default)]
    pub name: Option<String>,
}

/// Response for product mutations.
#[derive(Debug, Serialize)]
pub struct ProductMutationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `POST /addproduct` - persist a new product with the next free id.
pub async fn add_product(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewProduct>, JsonRejection>,
) -> Result<Json<ProductMutationResponse>> {
    let Json(new_product) =
        payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let product = ProductRepository::new(state.db()).insert(new_product).await?;
    tracing::info!(id = %product.id, name = %product.name, "product added");

    Ok(Json(ProductMutationResponse {
        success: true,
        name: Some(product.name),
    }))
}

/// `POST /removeproduct` - delete a product by id.
///
/// Deleting an id that does not exist is still a success.
pub async fn remove_product(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RemoveProductRequest>, JsonRejection>,
) -> Result<Json<ProductMutationResponse>> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    ProductRepository::new(state.db()).delete(request.id).await?;
    tracing::info!(id = %request.id, "product removed");

    Ok(Json(ProductMutationResponse {
        success: true,
        name: request.name,
    }))
}

/// `GET /allproducts` - every product, storage order.
pub async fn all_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.db()).all().await?;
    Ok(Json(products))
}

/// `GET /newcollections` - the trailing window of recent products.
pub async fn new_collections(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.db()).new_collections().await?;
    Ok(Json(products))
}

/// `GET /popularinwomen` - the first 4 products in the "women" category.
pub async fn popular_in_women(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = ProductRepository::new(state.db())
        .popular(POPULAR_CATEGORY)
        .await?;
    Ok(Json(products))
}
