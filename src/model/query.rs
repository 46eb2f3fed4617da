/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::MAX_TRANSACTION_COUNT;
use crate::error::AppError;
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Optional filters for `GET /virtualcards/{id}/transactions`
///
/// Filters that are unset, empty or out of range are left out of the query
/// string entirely rather than being sent as empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionQuery {
    /// Maximum number of transactions; only sent when within `1..=500`
    pub count: Option<u32>,
    /// Only transactions before this timestamp
    pub before: Option<String>,
    /// Only transactions after this timestamp
    pub after: Option<String>,
    /// Comma-delimited list of statuses (e.g. `PENDING,CLEARED`)
    pub status: Option<String>,
}

impl TransactionQuery {
    /// Creates a query without filters
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the count
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the upper timestamp bound
    #[must_use]
    pub fn with_before(mut self, before: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self
    }

    /// Set the lower timestamp bound
    #[must_use]
    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    /// Set the comma-delimited status filter
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set several statuses at once, joined with commas
    #[must_use]
    pub fn with_statuses<I, S>(self, statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = statuses
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.with_status(joined)
    }

    /// Query parameters that will actually be sent, sorted by key
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(after) = non_empty(&self.after) {
            pairs.push(("after", after.to_string()));
        }
        if let Some(before) = non_empty(&self.before) {
            pairs.push(("before", before.to_string()));
        }
        if let Some(count) = self.count.filter(|c| (1..=MAX_TRANSACTION_COUNT).contains(c)) {
            pairs.push(("count", count.to_string()));
        }
        if let Some(status) = non_empty(&self.status) {
            pairs.push(("status", status.to_string()));
        }
        pairs
    }

    /// Appends the filters to `base`, leaving it untouched when no filter applies
    ///
    /// # Returns
    /// * `Ok(String)` - the URL with its percent-encoded query string
    /// * `Err(AppError::InvalidInput)` - if `base` is not an absolute URL
    pub fn apply_to(&self, base: &str) -> Result<String, AppError> {
        let pairs = self.to_query_pairs();
        if pairs.is_empty() {
            return Ok(base.to_string());
        }
        let mut url = Url::parse(base)
            .map_err(|e| AppError::InvalidInput(format!("invalid URL '{base}': {e}")))?;
        url.query_pairs_mut().extend_pairs(pairs);
        Ok(url.to_string())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
