// SPDX-License-Identifier: Apache-2.0

//! Cursor-based pagination.
//!
//! GitHub list endpoints return one page at a time and advertise the next one
//! through a `Link: <...>; rel="next"` header. This module treats that as a
//! plain iteration contract: fetch the page for a cursor, collect its items,
//! continue with the next cursor until there is none.

use std::future::Future;

use tracing::debug;

use crate::Result;

/// One page of results and the cursor for the page after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageChunk<T> {
    /// Items on this page, in API order.
    pub items: Vec<T>,
    /// Cursor (route or absolute URL) of the next page, if any.
    pub next: Option<String>,
}

/// Fetches pages starting at `first` until no next cursor remains.
///
/// Items are concatenated in page order. The first failing fetch aborts the
/// iteration and its error is returned; no partial result is produced.
pub async fn collect_pages<T, F, Fut>(first: String, mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<PageChunk<T>>>,
{
    let mut items = Vec::new();
    let mut cursor = Some(first);
    let mut pages = 0usize;

    while let Some(current) = cursor {
        pages += 1;
        debug!(page = pages, cursor = %current, "Fetching page");

        let chunk = fetch(current).await?;
        items.extend(chunk.items);
        cursor = chunk.next;
    }

    debug!(pages, items = items.len(), "Pagination complete");
    Ok(items)
}
