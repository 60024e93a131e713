//! Newtype IDs for type-safe identifiers.
//!
//! Product and post ids are both small positive integers in the source
//! data; the newtypes keep them from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate numeric newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A positive numeric identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Create a new ID.
            pub fn new(id: u32) -> Self {
                Self(id)
            }

            /// Get the raw value.
            pub fn get(&self) -> u32 {
                self.0
            }

            /// Whether the id satisfies the positivity invariant.
            pub fn is_valid(&self) -> bool {
                self.0 > 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(ProductId);
define_id!(PostId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_validity() {
        assert!(ProductId::new(1).is_valid());
        assert!(!ProductId::new(0).is_valid());
        assert_eq!(PostId::from(7).get(), 7);
    }

    #[test]
    fn test_id_serde_transparent() {
        let json = serde_json::to_string(&ProductId::new(42)).unwrap();
        assert_eq!(json, "42");
        let id: PostId = serde_json::from_str("3").unwrap();
        assert_eq!(id, PostId::new(3));
    }
}
