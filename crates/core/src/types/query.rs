//! Free-text search queries and ID list filters.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned for an empty search query.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("query cannot be empty")]
pub struct QueryError;

/// A non-empty search query, passed to Shopify as-is.
///
/// The query syntax (`email:bob@example.com`, `country:Canada`, ...) is
/// Shopify's; only emptiness is checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Parse a search query.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if the input is empty or only whitespace.
    pub fn parse(s: &str) -> Result<Self, QueryError> {
        if s.trim().is_empty() {
            return Err(QueryError);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SearchQuery {
    type Error = QueryError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<SearchQuery> for String {
    fn from(query: SearchQuery) -> Self {
        query.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors that can occur when parsing an [`IdList`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdListError {
    /// No IDs were given.
    #[error("ID list cannot be empty")]
    Empty,
    /// An item is not a positive integer.
    #[error("{0:?} is not a positive integer ID")]
    InvalidItem(String),
}

/// A comma-separated list of positive numeric IDs, as taken by filters such
/// as `inventory_item_ids` and `location_ids`.
///
/// ```
/// use shopify_admin_mcp_core::IdList;
///
/// let ids = IdList::parse("808950810, 39072856").unwrap();
/// assert_eq!(ids.to_string(), "808950810,39072856");
/// assert!(IdList::parse("12,abc").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdList(Vec<u64>);

impl IdList {
    /// Parse a comma-separated ID list. Whitespace around items is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`IdListError`] if the list is empty or an item is not a
    /// positive integer.
    pub fn parse(s: &str) -> Result<Self, IdListError> {
        if s.trim().is_empty() {
            return Err(IdListError::Empty);
        }

        s.split(',')
            .map(str::trim)
            .map(|item| {
                item.parse::<u64>()
                    .ok()
                    .filter(|id| *id > 0)
                    .ok_or_else(|| IdListError::InvalidItem(item.to_owned()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Returns the parsed IDs.
    #[must_use]
    pub fn ids(&self) -> &[u64] {
        &self.0
    }
}

impl fmt::Display for IdList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}
