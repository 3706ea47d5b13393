//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around the given integer type with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Ord`, `Hash`
/// - Conversion methods: `new()`, `get()`
/// - `From` implementations in both directions
///
/// # Example
///
/// ```rust
/// # use thaam_core::define_id;
/// define_id!(ProductId, i64);
///
/// let first = ProductId::new(1);
/// assert_eq!(first.get(), 1);
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $repr:ty) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name($repr);

        impl $name {
            /// Create a new ID from the underlying value.
            #[must_use]
            pub const fn new(id: $repr) -> Self {
                Self(id)
            }

            /// Get the underlying value.
            #[must_use]
            pub const fn get(&self) -> $repr {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$repr> for $name {
            fn from(id: $repr) -> Self {
                Self(id)
            }
        }

        impl From<$name> for $repr {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Server-assigned product ids are monotonically increasing integers.
define_id!(ProductId, i64);

impl ProductId {
    /// The id assigned to the first product in an empty store.
    pub const FIRST: Self = Self(1);

    /// The id that follows this one.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_next() {
        assert_eq!(ProductId::FIRST.get(), 1);
        assert_eq!(ProductId::FIRST.next().get(), 2);
        assert_eq!(ProductId::new(41).next(), ProductId::new(42));
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");

        let parsed: ProductId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_ordering() {
        assert!(ProductId::new(1) < ProductId::new(2));
    }

    #[test]
    fn test_display() {
        assert_eq!(ProductId::new(12).to_string(), "12");
    }
}
