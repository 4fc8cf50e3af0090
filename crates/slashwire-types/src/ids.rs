//! Strongly-typed platform identifier.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A platform entity ID (application, guild, user, channel, role).
///
/// The platform transmits IDs as decimal strings. Uses `Arc<str>` internally
/// so cloning is an atomic increment instead of a heap allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Snowflake(Arc<str>);

impl Snowflake {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Snowflake {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets side-tables keyed by `Snowflake` be queried with a raw `&str` value.
impl Borrow<str> for Snowflake {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Snowflake {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Snowflake {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<u64> for Snowflake {
    fn from(id: u64) -> Self {
        Self::new(id.to_string())
    }
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Some payloads (and hand-written configs) carry IDs as bare integers.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Str(String),
            Int(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Str(s) => Snowflake::from(s),
            Raw::Int(n) => Snowflake::from(n),
        })
    }
}
