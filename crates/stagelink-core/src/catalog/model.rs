//! Creative domain model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a creative.
///
/// Ids arrive both as numbers (catalog literals) and as strings (stored
/// drafts, CLI arguments). Both are normalized once, at construction, to a
/// trimmed string so lookups compare like with like.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "String")]
pub struct CreativeId(String);

impl CreativeId {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CreativeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for CreativeId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for CreativeId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for CreativeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CreativeId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<&CreativeId> for CreativeId {
    fn from(id: &CreativeId) -> Self {
        id.clone()
    }
}

impl From<serde_json::Value> for CreativeId {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::new(s),
            other => Self::new(other.to_string()),
        }
    }
}

impl From<CreativeId> for String {
    fn from(id: CreativeId) -> Self {
        id.0
    }
}

/// A bookable service. Price and duration are display strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub name: String,
    pub price: String,
    pub duration: String,
}

impl ServiceOffering {
    pub fn new(name: &str, price: &str, duration: &str) -> Self {
        Self {
            name: name.to_string(),
            price: price.to_string(),
            duration: duration.to_string(),
        }
    }
}

/// A bookable service provider profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creative {
    pub id: CreativeId,
    pub name: String,
    /// Craft, e.g. "DJ" or "Producer". Not an account role.
    pub role: String,
    pub genres: Vec<String>,
    pub location: String,
    pub rating: f32,
    pub review_count: u32,
    pub services: Vec<ServiceOffering>,
    pub bio: String,
}

impl Creative {
    pub fn service(&self, name: &str) -> Option<&ServiceOffering> {
        self.services.iter().find(|s| s.name == name)
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g.eq_ignore_ascii_case(genre))
    }
}
