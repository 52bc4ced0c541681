// src/config/options.rs
use std::time::Duration;

use super::consts::*;
use super::SpellId;
use crate::error::ItemError;

/// Which data environment of the site to read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Branch {
    Live,
    #[default]
    Ptr,
}

impl Branch {
    pub fn path(&self) -> &'static str {
        match self {
            Branch::Live => "classic",
            Branch::Ptr => "classic-ptr",
        }
    }
}

/// Which embedded spell id anchors the secondary lookup.
///
/// The effect spell is not reliably at any fixed position in a tooltip, so
/// this is a heuristic; the override table covers the cases where it misses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BasePolicy {
    pub index: usize,
    pub min_embedded: usize,
}

impl Default for BasePolicy {
    fn default() -> Self {
        Self { index: 0, min_embedded: MIN_EMBEDDED }
    }
}

impl BasePolicy {
    pub fn select(&self, embedded: &[SpellId]) -> Result<SpellId, ItemError> {
        let required = self.min_embedded.max(self.index.saturating_add(1));
        let too_few = ItemError::TooFewEmbedded { found: embedded.len(), required };
        if embedded.len() < required {
            return Err(too_few);
        }
        embedded.get(self.index).copied().ok_or(too_few)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub branch: Branch,
    pub site_root: String,
    pub tooltip_root: String,
    pub item_query: String,
    pub page_size: usize,
    pub wait_timeout: Duration,
    pub base_policy: BasePolicy,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            branch: Branch::default(),
            site_root: SITE_ROOT.to_string(),
            tooltip_root: TOOLTIP_ROOT.to_string(),
            item_query: ITEM_QUERY.to_string(),
            page_size: PAGE_SIZE,
            wait_timeout: Duration::from_secs(WAIT_TIMEOUT_SECS),
            base_policy: BasePolicy::default(),
        }
    }
}

impl ScrapeOptions {
    /// Listing page; `offset` is the listview fragment (`#50`, `#100`, …).
    pub fn listing_url(&self, offset: Option<usize>) -> String {
        let base = format!("{}/{}/{}", self.site_root, self.branch.path(), self.item_query);
        match offset {
            Some(o) => format!("{base}#{o}"),
            None => base,
        }
    }

    pub fn tooltip_url(&self, item: u32) -> String {
        format!("{}/{}/tooltip/item/{}", self.tooltip_root, self.branch.path(), item)
    }

    pub fn spell_url(&self, spell: SpellId) -> String {
        format!("{}/{}/spell={}", self.site_root, self.branch.path(), spell)
    }

    pub fn see_also_url(&self, spell: SpellId) -> String {
        format!("{}#{}", self.spell_url(spell), SEE_ALSO_FRAGMENT)
    }
}
