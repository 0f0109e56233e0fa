use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($name:ident) => {
        /// Server-assigned opaque identifier. The client never derives
        /// meaning from the value beyond path interpolation.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

define_id!(CharacterId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_id_display_matches_wire_value() {
        let id = CharacterId::from(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.as_i64(), 42);
    }

    #[test]
    fn test_character_id_serde_transparent() {
        let id = CharacterId::from(7);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "7");
        let back: CharacterId = serde_json::from_str("7").expect("deserialize");
        assert_eq!(back, id);
    }
}
