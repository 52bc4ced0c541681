// src/scrape/enumerate.rs
use std::collections::HashSet;

use crate::{
    config::{ItemId, ScrapeOptions},
    core::Session,
    error::EnumerateError,
    progress::Progress,
    specs::listing,
};

/// Every item id matching the listing filter, in listing order.
///
/// Any failure here is fatal: a partial candidate set would silently produce
/// an incomplete artifact.
pub fn enumerate_items(
    session: &mut dyn Session,
    opts: &ScrapeOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<ItemId>, EnumerateError> {
    listing::open(session, opts, None)?;
    let total = listing::read_total(session)?;
    let pages = listing::page_count(total, opts.page_size);
    tracing::debug!(total, pages, "Listing size");

    // `total` is page text; don't size allocations by it
    let mut seen = HashSet::new();
    let mut ids = Vec::new();

    for page in 0..pages {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Loading page {page} of items…"));
        }
        listing::open(session, opts, Some(page * opts.page_size))?;

        for id in listing::read_row_ids(session, page)? {
            if seen.insert(id) {
                ids.push(id);
            } else {
                tracing::debug!(id, page, "Item repeated across pages");
            }
        }
    }

    if ids.len() != total {
        tracing::warn!(total, found = ids.len(), "Listing count and rows disagree");
    }
    Ok(ids)
}
