//! Application services.
//!
//! Services sit between the route handlers and the repositories: they hold
//! the domain rules (id issuance, credential checks, cart invariants) and
//! delegate persistence to [`crate::db`].

pub mod auth;
pub mod cart;
pub mod token;

pub use auth::{AuthError, AuthService};
pub use cart::{CartError, CartService};
pub use token::{TokenError, TokenService};
