// src/config/overrides.rs
//! Hand-verified corrections for base spells the related-spell lookup gets wrong.
//!
//! The table is consulted before any network access. Entries exist for spells
//! whose page lacks the "See also" metadata, and for items with several
//! class-specific variants that look identical to the lookup.

use std::{collections::HashMap, fs, path::Path};

use super::SpellId;
use crate::error::OverrideError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverrideTable {
    map: HashMap<SpellId, SpellId>,
}

impl OverrideTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in corrections.
    pub fn builtin() -> Self {
        Self::from_pairs([
            (1219819, 1220096), // Soul of Echoes
            (1219947, 1220355), // Soul of the Night
            (1219740, 1219957), // Soul of the Tactician
            // Soul of the Refined: Paladin, Priest, Shaman, Warlock
            (1219870, 1220198),
            (1219825, 1220108),
            (1219903, 1220264),
            (1219786, 1220034),
            (1233551, 1220352), // Soul of the Starcaller
        ])
    }

    pub fn from_pairs<I: IntoIterator<Item = (SpellId, SpellId)>>(pairs: I) -> Self {
        Self { map: pairs.into_iter().collect() }
    }

    pub fn get(&self, base: SpellId) -> Option<SpellId> {
        self.map.get(&base).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn load(path: &Path) -> Result<Self, OverrideError> {
        let text = fs::read_to_string(path).map_err(|source| OverrideError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// One `base,effect` pair per line. `#` starts a comment.
    pub fn parse(text: &str) -> Result<Self, OverrideError> {
        let mut map = HashMap::new();
        for (i, raw) in text.lines().enumerate() {
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let err = |reason: String| OverrideError::Parse { line: i + 1, reason };

            let (base, effect) = line
                .split_once(',')
                .ok_or_else(|| err(format!("expected `base,effect`, got `{line}`")))?;
            let base: SpellId = base
                .trim()
                .parse()
                .map_err(|_| err(format!("bad base id `{}`", base.trim())))?;
            let effect: SpellId = effect
                .trim()
                .parse()
                .map_err(|_| err(format!("bad effect id `{}`", effect.trim())))?;
            if effect == 0 {
                return Err(err("effect id must be positive".to_string()));
            }
            if map.insert(base, effect).is_some() {
                tracing::warn!(base, line = i + 1, "duplicate override, last one wins");
            }
        }
        Ok(Self { map })
    }
}
