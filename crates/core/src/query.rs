//! Paged query results.

use serde::{Deserialize, Serialize};

/// Envelope returned by list and search endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedQueryResponse<T> {
    pub limit: u32,
    pub offset: u32,
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    pub results: Vec<T>,
}

impl<T> PagedQueryResponse<T> {
    /// Consume the envelope, keeping only the results.
    #[must_use]
    pub fn into_results(self) -> Vec<T> {
        self.results
    }

    /// First result, if any.
    #[must_use]
    pub fn into_first(self) -> Option<T> {
        self.results.into_iter().next()
    }
}
