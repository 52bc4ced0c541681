// src/specs/listing.rs
//! Layout of the filtered item listview.
//!
//! - Results live in `#lv-items`; the total count is the last `<b>` of the
//!   first `.listview-nav` ("1 - 50 of **137**").
//! - Each `.listview-row` carries a `.listview-cleartext` link to the item's
//!   detail page (`…/item=<id>/<slug>`).
//! - Pages are addressed by fragment offset: `#0`, `#50`, `#100`, …

use crate::config::consts::{LINK_CLASS, LISTING_ID, LISTING_NAV_CLASS, ROW_CLASS};
use crate::config::{ItemId, ScrapeOptions};
use crate::core::links::id_from_link;
use crate::core::sanitize::digits_only;
use crate::core::{Locator, Session};
use crate::error::EnumerateError;

fn container() -> Locator {
    Locator::id(LISTING_ID)
}

/// Load a listing page and wait for its results container.
/// `offset: None` is the bare first page.
pub fn open(
    session: &mut dyn Session,
    opts: &ScrapeOptions,
    offset: Option<usize>,
) -> Result<(), EnumerateError> {
    session.goto(&opts.listing_url(offset))?;
    session.wait_for(&container(), opts.wait_timeout)?;
    Ok(())
}

/// Total number of results matching the filter.
pub fn read_total(session: &mut dyn Session) -> Result<usize, EnumerateError> {
    let loc = container()
        .then(&Locator::class(LISTING_NAV_CLASS))
        .then(&Locator::css("b:last-child"));
    let nodes = session.query(&loc)?;
    let text = &nodes.first().ok_or(EnumerateError::MissingTotal)?.text;
    digits_only(text)
        .parse()
        .map_err(|_| EnumerateError::BadTotal(text.clone()))
}

/// One item id per row, in row order.
pub fn read_row_ids(session: &mut dyn Session, page: usize) -> Result<Vec<ItemId>, EnumerateError> {
    let rows = session.query_within(
        &container().then(&Locator::class(ROW_CLASS)),
        &Locator::class(LINK_CLASS),
    )?;

    rows.iter()
        .enumerate()
        .map(|(row, links)| {
            links
                .first()
                .and_then(|n| n.attr("href"))
                .and_then(id_from_link)
                .ok_or(EnumerateError::MissingLink { page, row })
        })
        .collect()
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}
