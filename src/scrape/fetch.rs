// src/scrape/fetch.rs
use crate::{
    config::{ItemId, ScrapeOptions},
    core::HttpGet,
    error::ItemError,
};

/// Raw tooltip payload of `item`.
///
/// No retries: a failed or empty answer drops the item.
pub fn fetch_tooltip(
    http: &dyn HttpGet,
    opts: &ScrapeOptions,
    item: ItemId,
) -> Result<String, ItemError> {
    let url = opts.tooltip_url(item);
    tracing::debug!(item, %url, "Fetching tooltip");

    let resp = http
        .get(&url)
        .map_err(|e| ItemError::Fetch { item, reason: e.to_string() })?;

    if !resp.is_success() {
        return Err(ItemError::Fetch {
            item,
            reason: format!("status code {}", resp.status),
        });
    }
    if resp.body.trim().is_empty() {
        return Err(ItemError::Fetch { item, reason: "empty body".to_string() });
    }
    Ok(resp.body)
}
