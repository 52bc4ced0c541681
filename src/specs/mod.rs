//! # Page layouts
//!
//! Each module covers one page or endpoint of the site and encodes *where the
//! data lives* and *how to read it*:
//! - `listing` – the filtered item listview (result count, one item id per row).
//! - `tooltip` – the raw item tooltip payload and the spell ids embedded in it.
//! - `spell` – a spell's own page ("See also" related spells, effect description).
//!
//! Specs navigate and extract. They do **not** decide what to skip, retry or
//! write; that belongs to `scrape`.
//!
//! ```text
//! scrape::run → specs::listing  (enumerate)
//!             → specs::tooltip  (fetch + extract)
//!             → specs::spell    (related-spell lookup)
//! ```
//!
//! Specs are testable offline against captured markup via `core::HtmlSession`.
pub mod listing;
pub mod spell;
pub mod tooltip;
