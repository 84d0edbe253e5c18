//! Common types shared across Shopify REST resources.

use std::ops::Deref;

use serde::{Deserialize, Serialize, Serializer, de::DeserializeOwned};

/// Fields of a resource that have no typed counterpart, preserved verbatim.
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// Timestamp as returned by Shopify (ISO 8601 with the shop's UTC offset).
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;

/// Query string parameters in the order they are appended to a URL.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Response of a `count.json` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    /// Number of matching records.
    pub count: u64,
}

/// A decoded response that serializes back to the exact JSON Shopify sent.
///
/// Derefs to the typed view. Serializing emits the original document, so
/// `null` values and fields with no typed counterpart survive unchanged.
#[derive(Debug, Clone)]
pub struct Verbatim<T> {
    value: T,
    raw: serde_json::Value,
}

impl<T: DeserializeOwned> Verbatim<T> {
    /// Decode `body` into `T`, keeping the parsed document alongside.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` is not JSON or does not match `T`.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let raw: serde_json::Value = serde_json::from_str(body)?;
        let value = T::deserialize(&raw)?;
        Ok(Self { value, raw })
    }
}

impl<T> Verbatim<T> {
    /// The document as Shopify returned it.
    #[must_use]
    pub const fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    /// Discard the document and keep the typed view.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> Deref for Verbatim<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> Serialize for Verbatim<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}
