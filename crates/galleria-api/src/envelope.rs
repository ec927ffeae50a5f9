// Response envelopes shared by all collection endpoints

use serde::Deserialize;

use crate::model::User;

/// Envelope returned by `GET /collection` list endpoints.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub current_page: u64,
    #[serde(default)]
    pub total_pages: u64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope returned by single-record reads and writes.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ItemEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope returned by `DELETE /collection/:id`.
#[derive(Clone, Debug, Deserialize)]
pub struct AckEnvelope {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope returned by the login endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginEnvelope {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One page of a collection, replaced wholesale on every successful fetch.
///
/// Invariants hold after construction through [`PageResult::from_envelope`]:
/// `1 <= page <= max(total_pages, 1)` and `items.len() <= limit`.
#[derive(Clone, Debug, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub total_pages: u64,
}

impl<T> PageResult<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            total_pages: 0,
        }
    }

    /// Number of pages a collection of `total` items spans at `limit` per page.
    pub fn pages_for(total: u64, limit: u64) -> u64 {
        if limit == 0 { 0 } else { total.div_ceil(limit) }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Build a page from a list envelope, enforcing the page invariants.
    ///
    /// The page number is clamped into `[1, max(total_pages, 1)]`. A server
    /// that returns more rows than the requested limit violates the
    /// collection contract; the excess rows are dropped rather than rendered.
    pub fn from_envelope(envelope: ListEnvelope<T>, limit: u64) -> Self {
        let ListEnvelope {
            data: mut items,
            total,
            current_page,
            mut total_pages,
            ..
        } = envelope;

        if limit > 0 && items.len() as u64 > limit {
            tracing::warn!(
                returned = items.len(),
                limit,
                "server returned more rows than requested; truncating"
            );
            items.truncate(limit as usize);
        }
        if total_pages == 0 && total > 0 {
            total_pages = Self::pages_for(total, limit);
        }
        let page = current_page.clamp(1, total_pages.max(1));

        Self {
            items,
            total,
            page,
            total_pages,
        }
    }
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}
