// src/scrape/mod.rs
mod descriptions;
mod enumerate;
mod fetch;
mod resolve;
mod run;

pub use descriptions::{collect_descriptions, parse_enchant_refs, Described, EnchantRef};
pub use enumerate::enumerate_items;
pub use fetch::fetch_tooltip;
pub use resolve::EffectResolver;
pub use run::{resolve_candidate, run};

use crate::config::SpellId;

/// Effect spell id paired with the *item's* tooltip (never the spell's).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRecord {
    pub effect: SpellId,
    pub payload: String,
}
