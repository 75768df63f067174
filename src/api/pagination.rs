// src/api/pagination.rs
//! Draining of cursor-paginated listings.

use super::types::PaginatedResponse;
use crate::error::AppError;
use std::future::Future;

/// Calls `fetch_fn` with successive cursors and collects every result in order.
///
/// Stops when a page reports `has_more == false`. A page that claims more
/// results but carries no cursor also ends the drain, with a warning, since
/// there is no way to ask for the rest.
pub async fn fetch_all_pages<T, F, Fut>(mut fetch_fn: F) -> Result<Vec<T>, AppError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0u32;

    loop {
        let response = fetch_fn(cursor).await?;
        pages_fetched += 1;
        all_items.extend(response.results);

        if !response.has_more {
            break;
        }

        match response.next_cursor {
            Some(next) => cursor = Some(next),
            None => {
                log::warn!(
                    "Listing reported more results after page {} but returned no cursor; stopping",
                    pages_fetched
                );
                break;
            }
        }
    }

    log::debug!(
        "Drained {} item(s) across {} page(s)",
        all_items.len(),
        pages_fetched
    );
    Ok(all_items)
}
