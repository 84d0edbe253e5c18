//! Newtype IDs for type-safe resource references.
//!
//! Shopify REST resources are addressed by positive 64-bit integers. Use the
//! `define_id!` macro to create wrappers that prevent mixing IDs from
//! different resource kinds and that reject zero or negative input.

/// Error returned when a raw integer is not a valid resource ID.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} must be a positive integer, got {value}")]
pub struct IdError {
    /// Name of the ID type that rejected the value.
    pub kind: &'static str,
    /// The rejected value.
    pub value: i64,
}

/// Macro to define a type-safe resource ID wrapper.
///
/// Creates a newtype wrapper around `u64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `get()`
/// - `TryFrom<i64>` that rejects values below 1
///
/// # Example
///
/// ```rust
/// # use shopify_admin_mcp_core::define_id;
/// define_id!(WidgetId);
/// define_id!(GadgetId);
///
/// let widget = WidgetId::try_from(7).unwrap();
/// assert_eq!(widget.get(), 7);
/// assert!(WidgetId::try_from(0).is_err());
///
/// // These are different types, so this won't compile:
/// // let _: GadgetId = widget;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create an ID from a value already known to be positive.
            ///
            /// Returns `None` for zero.
            #[must_use]
            pub const fn new(id: u64) -> Option<Self> {
                if id == 0 { None } else { Some(Self(id)) }
            }

            /// Get the underlying value.
            #[must_use]
            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = $crate::types::id::IdError;

            fn try_from(value: i64) -> ::core::result::Result<Self, Self::Error> {
                u64::try_from(value)
                    .ok()
                    .and_then(Self::new)
                    .ok_or($crate::types::id::IdError {
                        kind: stringify!($name),
                        value,
                    })
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(OrderId);
define_id!(CustomerId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_ids_are_accepted() {
        let id = ProductId::try_from(632_910_392).unwrap();
        assert_eq!(id.get(), 632_910_392);
        assert_eq!(id.to_string(), "632910392");
    }

    #[test]
    fn test_zero_and_negative_are_rejected() {
        assert_eq!(
            OrderId::try_from(0),
            Err(IdError {
                kind: "OrderId",
                value: 0
            })
        );
        let err = CustomerId::try_from(-4).unwrap_err();
        assert_eq!(err.to_string(), "CustomerId must be a positive integer, got -4");
    }

    #[test]
    fn test_new_rejects_zero() {
        assert!(ProductId::new(0).is_none());
        assert_eq!(ProductId::new(1).map(u64::from), Some(1));
    }

    #[test]
    fn test_serde_transparent() {
        let id = CustomerId::try_from(207_119_551).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "207119551");
    }
}
