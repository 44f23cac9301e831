//! Newtype identifiers for the things Burrow names.
//!
//! Clusters, consumer groups, and topics are all plain strings on the wire,
//! but they are never interchangeable: passing a topic where a group is
//! expected produces a valid URL for the wrong resource. Wrapping each in its
//! own type makes that mistake a compile error.
//!
//! On the wire each name is a bare JSON string, so a list of names in a
//! response body decodes straight into `Vec<ClusterName>` and friends.
//! Decoding applies the same non-empty check as `new`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An identifier was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("identifier must not be empty")]
pub struct EmptyIdentifier;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display, AsRef<str>,
// and the String conversions serde goes through.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is empty.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                if v.is_empty() { None } else { Some(Self(v)) }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = EmptyIdentifier;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value).ok_or(EmptyIdentifier)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

string_id! {
    /// Names a Kafka cluster as configured in Burrow (e.g. `"local"`, `"prod-eu"`).
    ClusterName
}

string_id! {
    /// Names a consumer group within a cluster.
    ///
    /// Only unique per cluster; the pair `(ClusterName, ConsumerGroupName)`
    /// identifies a group.
    ConsumerGroupName
}

string_id! {
    /// Names a Kafka topic.
    TopicName
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_names_are_rejected() {
        assert!(ClusterName::new("").is_none());
        assert!(ConsumerGroupName::new(String::new()).is_none());
        assert!(TopicName::new("").is_none());
    }

    #[test]
    fn names_display_verbatim() {
        let group = ConsumerGroupName::new("billing-consumers").unwrap();
        assert_eq!(group.to_string(), "billing-consumers");
        assert_eq!(group.as_str(), "billing-consumers");
    }

    #[test]
    fn names_are_transparent_on_the_wire() {
        let names: Vec<ClusterName> = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(
            names,
            vec![ClusterName::new("a").unwrap(), ClusterName::new("b").unwrap()]
        );

        let json = serde_json::to_string(&TopicName::new("orders").unwrap()).unwrap();
        assert_eq!(json, r#""orders""#);
    }

    #[test]
    fn empty_names_are_rejected_on_decode() {
        assert!(serde_json::from_str::<Vec<ClusterName>>(r#"["a", ""]"#).is_err());
        assert!(serde_json::from_str::<ConsumerGroupName>("\"\"").is_err());
        assert_eq!(TopicName::try_from(String::new()), Err(EmptyIdentifier));
    }
}
