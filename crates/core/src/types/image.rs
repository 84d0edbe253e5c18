//! Product image source URL.

use core::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Errors that can occur when parsing an [`ImageSource`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageSourceError {
    /// The input is not an absolute URL.
    #[error("image src is not a valid URL: {0}")]
    Invalid(#[from] url::ParseError),
    /// The URL scheme is not http or https.
    #[error("image src must use http or https, got {0}")]
    Scheme(String),
}

/// Publicly reachable URL Shopify downloads a product image from.
///
/// The text is kept exactly as given; parsing only checks it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageSource(String);

impl ImageSource {
    /// Parse an image URL.
    ///
    /// # Errors
    ///
    /// Returns [`ImageSourceError`] if the input is not an absolute http(s) URL.
    pub fn parse(s: &str) -> Result<Self, ImageSourceError> {
        let url = Url::parse(s)?;
        match url.scheme() {
            "http" | "https" => Ok(Self(s.to_owned())),
            other => Err(ImageSourceError::Scheme(other.to_owned())),
        }
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ImageSource {
    type Error = ImageSourceError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<ImageSource> for String {
    fn from(src: ImageSource) -> Self {
        src.0
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
