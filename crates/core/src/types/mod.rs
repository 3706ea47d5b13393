//! Core types for Thaam.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod item;

pub use email::{Email, EmailError};
pub use id::*;
pub use item::ItemId;
