//! Domain types for the storefront API.
//!
//! These types represent validated domain objects separate from the BSON
//! document types the repositories persist (see [`crate::db`]).

pub mod cart;
pub mod product;

pub use cart::{CartMap, seeded_cart};
pub use product::{NewProduct, Product};
