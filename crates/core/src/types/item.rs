//! Cart item identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an item slot in a user's cart.
///
/// Carts are keyed by the stringified item number. New accounts are seeded
/// with slots `0..SEEDED_SLOTS`, but mutation tolerates any item id: a slot
/// outside the seeded range is created on first increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    /// Number of zero-quantity slots pre-seeded into a new cart.
    pub const SEEDED_SLOTS: u32 = 300;

    /// Create an item id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// The cart map key for this item (the stringified item number).
    #[must_use]
    pub fn key(&self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
