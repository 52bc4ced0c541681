// src/config/consts.rs

// Net config
pub const SITE_ROOT: &str = "https://www.wowhead.com";
pub const TOOLTIP_ROOT: &str = "https://nether.wowhead.com";
pub const USER_AGENT: &str = "rune_scrape/0.1";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Listing
pub const ITEM_QUERY: &str =
    "items/name:%22Soul+of+the%22?filter=82:142;2:0;11506:spell_holy_divinespirit";
pub const PAGE_SIZE: usize = 50;

// Rendering
pub const WAIT_TIMEOUT_SECS: u64 = 10;
pub const PAGE_READY: &str = "data-tree-switcher";
pub const LISTING_ID: &str = "lv-items";
pub const LISTING_NAV_CLASS: &str = "listview-nav";
pub const ROW_CLASS: &str = "listview-row";
pub const LINK_CLASS: &str = "listview-cleartext";
pub const SEE_ALSO_FRAGMENT: &str = "see-also-other";
pub const SEE_ALSO_TAB_ID: &str = "tab-see-also-other";
pub const SPELL_DETAILS_ID: &str = "spelldetails";
pub const DESCRIPTION_CLASS: &str = "q2";

// Resolution
pub const MIN_EMBEDDED: usize = 2;

pub const LOG_FILE: &str = ".store/debug.log";
