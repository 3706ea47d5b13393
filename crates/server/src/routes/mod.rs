//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - liveness text
//!
//! # Catalog
//! POST /addproduct      - add a product (server assigns the id)
//! POST /removeproduct   - delete a product by id (idempotent)
//! GET  /allproducts     - every product, storage order
//! GET  /newcollections  - trailing window of recent products
//! GET  /popularinwomen  - first 4 products in the "women" category
//!
//! # Images
//! POST /upload          - single multipart file upload
//! GET  /images/*        - uploaded images (ServeDir, mounted in main)
//!
//! # Accounts
//! POST /signup          - register, returns a token
//! POST /login           - authenticate, returns a token
//!
//! # Cart (requires auth-token header)
//! POST /addtocart       - increment an item quantity
//! POST /removefromcart  - decrement an item quantity (floor at zero)
//! POST /getcart         - the stored cart map
//! ```

pub mod auth;
pub mod cart;
pub mod products;
pub mod upload;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the storefront API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(liveness))
        // Image upload
        .route("/upload", post(upload::upload))
        // Catalog
        .route("/addproduct", post(products::add_product))
        .route("/removeproduct", post(products::remove_product))
        .route("/allproducts", get(products::all_products))
        .route("/newcollections", get(products::new_collections))
        .route("/popularinwomen", get(products::popular_in_women))
        // Accounts
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        // Cart
        .route("/addtocart", post(cart::add_to_cart))
        .route("/removefromcart", post(cart::remove_from_cart))
        .route("/getcart", post(cart::get_cart))
}

/// Liveness endpoint.
///
/// Returns plain text if the server is running. Does not check dependencies.
async fn liveness() -> &'static str {
    "Thaam server is running"
}
