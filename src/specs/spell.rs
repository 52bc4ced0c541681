// src/specs/spell.rs
//! Layout of a spell's own page.
//!
//! - Page is ready once `#data-tree-switcher` renders.
//! - Related spells: the "See also" tab `#tab-see-also-other`, one
//!   `.listview-row` per spell with a `.listview-cleartext` link. The first
//!   row is the spell that actually fires for a rune item.
//! - Description: first `.q2` inside `#spelldetails`.

use crate::config::consts::{
    DESCRIPTION_CLASS, LINK_CLASS, PAGE_READY, ROW_CLASS, SEE_ALSO_TAB_ID, SPELL_DETAILS_ID,
};
use crate::config::{ScrapeOptions, SpellId};
use crate::core::links::id_from_link;
use crate::core::{Locator, Session};
use crate::error::{ItemError, SessionError};

fn open(session: &mut dyn Session, url: &str, opts: &ScrapeOptions) -> Result<(), SessionError> {
    session.goto(url)?;
    session.wait_for(&Locator::id(PAGE_READY), opts.wait_timeout)
}

/// First related spell of `base`, from its "See also" tab.
pub fn first_related(
    session: &mut dyn Session,
    opts: &ScrapeOptions,
    base: SpellId,
) -> Result<SpellId, ItemError> {
    let lookup = |source: SessionError| ItemError::Session { base, source };

    open(session, &opts.see_also_url(base), opts).map_err(lookup)?;

    let tab = Locator::id(SEE_ALSO_TAB_ID);
    if session.query(&tab).map_err(lookup)?.is_empty() {
        return Err(ItemError::LookupAbsent { base });
    }

    let rows = session
        .query_within(&tab.then(&Locator::class(ROW_CLASS)), &Locator::class(LINK_CLASS))
        .map_err(lookup)?;
    let first = rows.first().ok_or(ItemError::NoRelated { base })?;

    let href = first.first().and_then(|n| n.attr("href")).unwrap_or_default();
    id_from_link(href).ok_or_else(|| ItemError::BadRelatedLink { base, href: href.to_string() })
}

/// Effect description text of `spell` (`None` if the page has none).
pub fn description(
    session: &mut dyn Session,
    opts: &ScrapeOptions,
    spell: SpellId,
) -> Result<Option<String>, SessionError> {
    open(session, &opts.spell_url(spell), opts)?;
    let loc = Locator::id(SPELL_DETAILS_ID).then(&Locator::class(DESCRIPTION_CLASS));
    Ok(session.query(&loc)?.into_iter().next().map(|n| n.text))
}
