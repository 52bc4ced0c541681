// src/scrape/run.rs
use crate::{
    config::{ItemId, OverrideTable, ScrapeOptions},
    core::{HttpGet, Session},
    error::{EnumerateError, ItemError},
    progress::Progress,
    specs::tooltip,
};

use super::{enumerate_items, fetch_tooltip, EffectResolver, ResolvedRecord};

/// One candidate end to end: tooltip → embedded ids → base → effect.
pub fn resolve_candidate(
    session: &mut dyn Session,
    http: &dyn HttpGet,
    opts: &ScrapeOptions,
    resolver: &EffectResolver<'_>,
    item: ItemId,
) -> Result<ResolvedRecord, ItemError> {
    let payload = fetch_tooltip(http, opts, item)?;
    let embedded = tooltip::embedded_spell_ids(&payload);
    let base = opts.base_policy.select(&embedded)?;
    let effect = resolver.resolve(session, base)?;
    Ok(ResolvedRecord { effect, payload })
}

/// Full pass: enumerate, then resolve each candidate in listing order.
///
/// Only enumeration can fail the run. Per-item failures are logged, reported
/// to `progress` and leave no record.
pub fn run(
    session: &mut dyn Session,
    http: &dyn HttpGet,
    opts: &ScrapeOptions,
    overrides: &OverrideTable,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<Vec<ResolvedRecord>, EnumerateError> {
    let items = enumerate_items(session, opts, progress.as_deref_mut())?;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Export Count ({}) {:?}", items.len(), items));
        p.begin(items.len());
    }

    let resolver = EffectResolver::new(overrides, opts);
    let records: Vec<ResolvedRecord> = items
        .iter()
        .filter_map(|&item| match resolve_candidate(session, http, opts, &resolver, item) {
            Ok(record) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(item);
                }
                Some(record)
            }
            Err(e) => {
                tracing::info!(item, error = %e, "Item skipped");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_skipped(item, &e.to_string());
                }
                None
            }
        })
        .collect();

    tracing::info!(candidates = items.len(), resolved = records.len(), "Run done");
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(records)
}
