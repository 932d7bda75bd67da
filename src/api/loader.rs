//! The catalog load sequence
//!
//! One list request, then one detail request per listed entry with at most
//! `max_concurrent` in flight, joined back in list order. Any failure fails
//! the whole load and drops whatever is still in flight.

use futures::{stream, StreamExt, TryStreamExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use super::client::CatalogSource;
use crate::error::LoadError;
use crate::state::data::CatalogItem;

/// Run the full load sequence against `source`.
///
/// Returns the items in the same order as the list response, or the first
/// failure. Cancelling `cancel` aborts in-flight requests and yields
/// [`LoadError::Cancelled`].
#[instrument(skip(source, cancel))]
pub async fn load_catalog<S: CatalogSource>(
    source: &S,
    page_size: u32,
    max_concurrent: usize,
    cancel: &CancellationToken,
) -> Result<Vec<CatalogItem>, LoadError> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            info!("catalog load cancelled");
            Err(LoadError::Cancelled)
        }
        result = fetch_and_join(source, page_size, max_concurrent.max(1)) => result,
    }
}

async fn fetch_and_join<S: CatalogSource>(
    source: &S,
    page_size: u32,
    max_concurrent: usize,
) -> Result<Vec<CatalogItem>, LoadError> {
    let list = source.list(page_size).await?;
    debug!(entries = list.results.len(), max_concurrent, "fanning out detail requests");

    // `buffered` keeps input order regardless of completion order
    let items: Vec<CatalogItem> = stream::iter(list.results)
        .map(|entry| async move {
            let record = source.detail(&entry.url).await?;
            Ok::<_, LoadError>(CatalogItem::from(record))
        })
        .buffered(max_concurrent)
        .try_collect()
        .await?;

    Ok(items)
}
