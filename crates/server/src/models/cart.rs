//! User cart types.

use std::collections::HashMap;

use thaam_core::ItemId;

/// A user's cart: item key (stringified item number) to held quantity.
///
/// Quantities never go below zero; the repository enforces this with a
/// conditional decrement (see [`crate::db::users::UserRepository`]).
pub type CartMap = HashMap<String, i64>;

/// The cart a new account starts with: `ItemId::SEEDED_SLOTS` zero-quantity
/// slots keyed "0".."299".
#[must_use]
pub fn seeded_cart() -> CartMap {
    (0..ItemId::SEEDED_SLOTS)
        .map(|slot| (ItemId::new(slot).key(), 0))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_cart_has_300_zero_slots() {
        let cart = seeded_cart();
        assert_eq!(cart.len(), 300);
        assert!(cart.values().all(|&quantity| quantity == 0));
    }

    #[test]
    fn test_seeded_cart_keys_are_stringified_numbers() {
        let cart = seeded_cart();
        assert_eq!(cart.get("0"), Some(&0));
        assert_eq!(cart.get("299"), Some(&0));
        assert_eq!(cart.get("300"), None);
    }
}
