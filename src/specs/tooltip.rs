// src/specs/tooltip.rs
//! Layout of the item tooltip endpoint (`nether.wowhead.com/<branch>/tooltip/item/<id>`).
//!
//! The endpoint answers with raw markup wrapped in JSON; no rendering is
//! needed. Spell references inside it look like `/spell=<digits>` (slashes may
//! be JSON-escaped as `\/spell=`, which still contains the pattern).

use std::sync::LazyLock;

use regex::Regex;

use crate::config::SpellId;

static EMBEDDED_SPELL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/spell=(\d+)").expect("Invalid embedded spell regex"));

/// Spell ids referenced by a tooltip, in order of appearance.
///
/// Digit runs too long for a spell id are skipped.
pub fn embedded_spell_ids(payload: &str) -> Vec<SpellId> {
    EMBEDDED_SPELL
        .captures_iter(payload)
        .filter_map(|cap| cap.get(1)?.as_str().parse().ok())
        .collect()
}
