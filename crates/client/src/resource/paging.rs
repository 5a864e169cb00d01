//! List parameters and the "all remaining items" pager.

use serde::Serialize;
use std::future::Future;

use crate::error::{ClientError, Result};
use edgex_config::constants::DEFAULT_LIST_LIMIT;

/// How many items a list call should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// Every item from the offset onwards (`-1` on the command line).
    All,
    Count(usize),
}

impl Limit {
    /// Wire value: `-1` for `All`.
    pub fn as_i64(self) -> i64 {
        match self {
            Limit::All => -1,
            Limit::Count(n) => n as i64,
        }
    }
}

impl TryFrom<i64> for Limit {
    type Error = ClientError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            -1 => Ok(Limit::All),
            n if n >= 0 => Ok(Limit::Count(n as usize)),
            n => Err(ClientError::Validation(format!(
                "limit must be -1 (all) or a non-negative number, got {n}"
            ))),
        }
    }
}

/// Offset, limit and label filter of a list call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub offset: usize,
    pub limit: Limit,
    pub labels: Vec<String>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: Limit::Count(DEFAULT_LIST_LIMIT as usize),
            labels: Vec::new(),
        }
    }
}

impl ListQuery {
    pub fn new(offset: usize, limit: Limit) -> Self {
        Self {
            offset,
            limit,
            labels: Vec::new(),
        }
    }

    /// Every item, from the first.
    pub fn all() -> Self {
        Self::new(0, Limit::All)
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    /// Query parameters for one page request.
    pub(crate) fn page_params(&self, offset: usize, limit: usize) -> Vec<(&'static str, String)> {
        let mut params = vec![("offset", offset.to_string()), ("limit", limit.to_string())];
        let labels: Vec<&str> = self
            .labels
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect();
        if !labels.is_empty() {
            params.push(("labels", labels.join(",")));
        }
        params
    }
}

/// Items of one list call plus the parameters that produced them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub offset: usize,
    pub limit: i64,
    /// Total reported by the server, when it reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

/// Fetch every item from `start` onwards, `page_size` at a time.
///
/// `fetch(offset, limit)` returns one page and the server's total count.
/// Offsets strictly increase; the loop ends on an empty or short page.
/// Items beyond `page_size` in one page are dropped and fetched again at the next offset.
pub async fn collect_all<T, F, Fut>(
    start: usize,
    page_size: usize,
    mut fetch: F,
) -> Result<(Vec<T>, Option<u64>)>
where
    F: FnMut(usize, usize) -> Fut,
    Fut: Future<Output = Result<(Vec<T>, Option<u64>)>>,
{
    if page_size == 0 {
        return Err(ClientError::validation("page size must be greater than 0"));
    }

    let mut items = Vec::new();
    let mut total = None;
    let mut offset = start;
    loop {
        let (mut page, page_total) = fetch(offset, page_size).await?;
        // A server that ignores `limit` must not make the next page overlap this one.
        page.truncate(page_size);
        if total.is_none() {
            total = page_total;
        }
        let short = page.len() < page_size;
        items.extend(page);
        if short {
            break;
        }
        offset += page_size;
    }
    Ok((items, total))
}
