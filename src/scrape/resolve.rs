// src/scrape/resolve.rs
use crate::{
    config::{OverrideTable, ScrapeOptions, SpellId},
    core::Session,
    error::ItemError,
    specs::spell,
};

/// Base spell → effect spell.
///
/// The override table is a pinned correction layer: a hit returns at once and
/// the session is never touched. Everything else goes to the spell's
/// "See also" tab.
pub struct EffectResolver<'a> {
    overrides: &'a OverrideTable,
    opts: &'a ScrapeOptions,
}

impl<'a> EffectResolver<'a> {
    pub fn new(overrides: &'a OverrideTable, opts: &'a ScrapeOptions) -> Self {
        Self { overrides, opts }
    }

    pub fn resolve(&self, session: &mut dyn Session, base: SpellId) -> Result<SpellId, ItemError> {
        if let Some(effect) = self.overrides.get(base) {
            tracing::debug!(base, effect, "Override hit");
            return Ok(effect);
        }
        let effect = spell::first_related(session, self.opts, base)?;
        tracing::debug!(base, effect, "Resolved via related spells");
        Ok(effect)
    }
}
