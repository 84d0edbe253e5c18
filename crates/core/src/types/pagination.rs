//! Page size for list endpoints.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a page limit is out of range.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("limit must be between {min} and {max}, got {value}", min = PageLimit::MIN, max = PageLimit::MAX)]
pub struct LimitError {
    /// The rejected value.
    pub value: i64,
}

/// Number of records a list endpoint returns per page.
///
/// Shopify caps REST list pages at 250 records. When the caller does not
/// specify a limit, [`PageLimit::default`] (50) is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u16")]
pub struct PageLimit(u16);

impl PageLimit {
    /// Smallest accepted limit.
    pub const MIN: u16 = 1;
    /// Largest accepted limit.
    pub const MAX: u16 = 250;
    /// Limit used when none is given.
    pub const DEFAULT: Self = Self(50);

    /// Get the limit as a number.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Resolve an optional caller-supplied limit, falling back to the default.
    ///
    /// # Errors
    ///
    /// Returns [`LimitError`] if a value is present and outside `1..=250`.
    pub fn from_optional(value: Option<i64>) -> Result<Self, LimitError> {
        value.map_or(Ok(Self::DEFAULT), Self::try_from)
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for PageLimit {
    type Error = LimitError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u16::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or(LimitError { value })
    }
}

impl From<PageLimit> for u16 {
    fn from(limit: PageLimit) -> Self {
        limit.0
    }
}

impl fmt::Display for PageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
