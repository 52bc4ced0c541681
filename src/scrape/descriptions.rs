// src/scrape/descriptions.rs
// Enchant descriptions: read (spell, effect) pairs from a source listing,
// fetch each spell's description, key it by effect id.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    config::{ScrapeOptions, SpellId},
    core::Session,
    progress::Progress,
    specs::spell,
};

static SPELL_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"SpellId:\s*(\d+)").expect("Invalid SpellId regex"));
static EFFECT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"EffectId:\s*(\d+)").expect("Invalid EffectId regex"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnchantRef {
    pub spell_id: SpellId,
    pub effect_id: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Described {
    pub effect_id: u32,
    pub description: String,
}

fn capture_id(re: &Regex, line: &str) -> Option<u32> {
    re.captures(line)?.get(1)?.as_str().parse().ok()
}

/// One ref per line carrying `SpellId: N`. Lines without an `EffectId` are
/// reported and skipped.
pub fn parse_enchant_refs(text: &str) -> Vec<EnchantRef> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let spell_id = capture_id(&SPELL_ID, line)?;
            match capture_id(&EFFECT_ID, line) {
                Some(effect_id) => Some(EnchantRef { spell_id, effect_id }),
                None => {
                    tracing::warn!(line = i + 1, spell_id, "SpellId without EffectId, skipped");
                    None
                }
            }
        })
        .collect()
}

pub fn collect_descriptions(
    session: &mut dyn Session,
    opts: &ScrapeOptions,
    refs: &[EnchantRef],
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Vec<Described> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(refs.len());
    }

    let mut out = Vec::with_capacity(refs.len());
    for r in refs {
        let reason = match spell::description(session, opts, r.spell_id) {
            Ok(Some(description)) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Spell {} has description {}", r.spell_id, description));
                    p.item_done(r.spell_id);
                }
                out.push(Described { effect_id: r.effect_id, description });
                continue;
            }
            Ok(None) => "no description on page".to_string(),
            Err(e) => e.to_string(),
        };
        tracing::info!(spell = r.spell_id, %reason, "Description skipped");
        if let Some(p) = progress.as_deref_mut() {
            p.item_skipped(r.spell_id, &reason);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    out
}
