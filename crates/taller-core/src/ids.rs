//! Strongly typed identifiers.
//!
//! Newtype wrappers over `Uuid` that prevent mixing up identifiers of
//! different entities at compile time.
//!
//! # Example
//!
//! ```
//! use taller_core::TallerId;
//!
//! let taller = TallerId::new();
//!
//! fn requires_taller(id: TallerId) -> String {
//!     id.to_string()
//! }
//!
//! let result = requires_taller(taller);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Error type for ID parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse
    pub id_type: &'static str,
    /// The underlying UUID parse error message
    pub message: String,
}

impl Display for ParseIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to parse {}: {}", self.id_type, self.message)
    }
}

impl std::error::Error for ParseIdError {}

/// Macro to define a strongly-typed ID type
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random ID using UUID v4.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns a reference to the underlying UUID.
            #[must_use]
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Returns the underlying UUID by value.
            #[must_use]
            pub fn into_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|e| ParseIdError {
                        id_type: stringify!($name),
                        message: e.to_string(),
                    })
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Strongly typed identifier for a taller (workshop tenant).
    ///
    /// Every tenant-scoped row carries one of these; queries always
    /// filter on it so one taller can never see another's data. Resource
    /// rows are addressed by plain `Uuid` path parameters, so the taller
    /// is the only entity that earns a newtype.
    TallerId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_valid_id() {
        let id = TallerId::new();
        let id_str = id.to_string();
        // UUID format: 8-4-4-4-12 hex digits
        assert_eq!(id_str.len(), 36);
        assert!(id_str.contains('-'));
    }

    #[test]
    fn test_from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        let id = TallerId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
        assert_eq!(id.into_uuid(), uuid);
    }

    #[test]
    fn test_display_returns_uuid_string() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let id = TallerId::from_uuid(uuid);
        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_default_creates_new_id() {
        let id1 = TallerId::default();
        let id2 = TallerId::default();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_serde_roundtrip() {
        let original = TallerId::new();
        let json = serde_json::to_string(&original).unwrap();
        let deserialized: TallerId = serde_json::from_str(&json).unwrap();
        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let uuid = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let id = TallerId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        // Plain quoted string, not an object
        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");
    }

    #[test]
    fn test_parse_valid_uuid() {
        let id: TallerId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn test_parse_invalid_uuid_returns_error() {
        let result: std::result::Result<TallerId, _> = "not-a-uuid".parse();
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.id_type, "TallerId");
        assert!(!err.message.is_empty());
    }

    #[test]
    fn test_error_display() {
        let result: std::result::Result<TallerId, _> = "invalid".parse();
        let err = result.unwrap_err();
        let display = err.to_string();
        assert!(display.contains("TallerId"));
        assert!(display.contains("Failed to parse"));
    }

    #[test]
    fn test_can_use_as_hashmap_key() {
        use std::collections::HashMap;

        let mut map: HashMap<TallerId, String> = HashMap::new();
        let id1 = TallerId::new();
        let id2 = TallerId::new();

        map.insert(id1, "taller1".to_string());
        map.insert(id2, "taller2".to_string());

        assert_eq!(map.get(&id1), Some(&"taller1".to_string()));
        assert_eq!(map.get(&id2), Some(&"taller2".to_string()));
    }

    #[test]
    fn test_copy_semantics() {
        let id1 = TallerId::new();
        let id2 = id1; // Copy
        assert_eq!(id1, id2);
    }
}
