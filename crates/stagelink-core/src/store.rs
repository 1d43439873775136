//! Key-value store trait and the persisted key names.

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::Result;

/// Keys of the persisted entries.
pub mod keys {
    pub const THEME: &str = "theme";
    /// Whether the stored theme came from the system or the user.
    pub const THEME_SOURCE: &str = "themeSource";
    pub const USER: &str = "user";
    /// Legacy auth token slot. Never written, cleared on logout.
    pub const TOKEN: &str = "token";
    pub const BOOKING_CREATIVE_ID: &str = "bookingCreativeId";
    pub const BOOKING_SERVICE: &str = "bookingService";
    pub const BOOKINGS: &str = "bookings";
}

/// Persistent string-keyed, string-valued store.
///
/// Records and sequences are stored JSON-encoded; see [`load_json`] and
/// [`store_json`].
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: String) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;

    async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }
}

/// Reads and decodes a JSON value.
pub async fn load_json<T>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>>
where
    T: DeserializeOwned,
{
    match store.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encodes and writes a JSON value.
pub async fn store_json<T>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<()>
where
    T: Serialize + Sync,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, raw).await
}
