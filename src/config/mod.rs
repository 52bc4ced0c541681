// src/config/mod.rs
pub mod consts;
pub mod options;
pub mod overrides;

pub use options::{BasePolicy, Branch, ScrapeOptions};
pub use overrides::OverrideTable;

/// Wowhead item id (a candidate).
pub type ItemId = u32;

/// Wowhead spell id (embedded, base or effect).
pub type SpellId = u32;
