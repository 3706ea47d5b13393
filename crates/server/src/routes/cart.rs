//! Cart route handlers.
//!
//! All three endpoints require a verified `auth-token` header; the
//! [`AuthUser`] extractor rejects unauthenticated requests with 401.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

use thaam_core::ItemId;

use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::models::CartMap;
use crate::services::CartService;
use crate::state::AppState;

/// Request body naming a cart item.
#[derive(Debug, Deserialize)]
pub struct CartItemRequest {
    #[serde(rename = "itemId")]
    pub item_id: ItemId,
}

/// Response for cart mutations.
#[derive(Debug, Serialize)]
pub struct CartMutationResponse {
    pub success: bool,
}

/// `POST /addtocart` - increment the quantity of an item by 1.
pub async fn add_to_cart(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: std::result::Result<Json<CartItemRequest>, JsonRejection>,
) -> Result<Json<CartMutationResponse>> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    CartService::new(state.db())
        .add(user_id, request.item_id)
        .await?;

    Ok(Json(CartMutationResponse { success: true }))
}

/// `POST /removefromcart` - decrement the quantity of an item by 1.
///
/// A decrement at zero quantity leaves the slot at zero.
pub async fn remove_from_cart(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    payload: std::result::Result<Json<CartItemRequest>, JsonRejection>,
) -> Result<Json<CartMutationResponse>> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    CartService::new(state.db())
        .remove(user_id, request.item_id)
        .await?;

    Ok(Json(CartMutationResponse { success: true }))
}

/// `POST /getcart` - the stored cart map for the authenticated user.
pub async fn get_cart(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<CartMap>> {
    let cart = CartService::new(state.db()).cart(user_id).await?;
    Ok(Json(cart))
}
