// Filter and pagination state for list requests

use std::collections::BTreeMap;

/// Default page size used by every list screen.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Well-known filter keys understood by the collection endpoints.
pub mod filter_keys {
    pub const SEARCH: &str = "search";
    pub const STATUS: &str = "status";
    pub const CATEGORY: &str = "category";
    pub const AUTHOR: &str = "author";
    pub const ROLE: &str = "role";
    pub const SORT_BY: &str = "sortBy";
    pub const SORT_ORDER: &str = "sortOrder";
}

/// The set of active query parameters controlling a list view.
///
/// Changing any entry except the page itself resets the page to 1, so a
/// narrowed result set is never viewed from a page that no longer exists.
/// Unset and empty values are omitted from outgoing requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    page: u64,
    limit: u64,
    values: BTreeMap<String, String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            values: BTreeMap::new(),
        }
    }
}

impl FilterState {
    pub fn with_limit(limit: u64) -> Self {
        Self {
            limit: limit.max(1),
            ..Self::default()
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set one filter entry. An empty value removes the entry. Either way
    /// the page is reset to 1.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.values.remove(&key);
        } else {
            self.values.insert(key, value);
        }
        self.page = 1;
    }

    /// Remove one filter entry, resetting the page to 1.
    pub fn clear(&mut self, key: &str) {
        self.values.remove(key);
        self.page = 1;
    }

    /// Move to another page without disturbing the other filters.
    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    /// Change the page size. The page resets to 1 since the old page number
    /// no longer addresses the same rows.
    pub fn set_limit(&mut self, limit: u64) {
        self.limit = limit.max(1);
        self.page = 1;
    }

    /// Serialize the active entries into query pairs. Filter entries come
    /// first in key order; `page` and `limit` are always present.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        pairs.push(("page".to_string(), self.page.to_string()));
        pairs.push(("limit".to_string(), self.limit.to_string()));
        pairs
    }
}
