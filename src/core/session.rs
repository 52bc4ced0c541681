// src/core/session.rs
//! Rendering-session seam.
//!
//! The pipeline only ever needs four things from a browser: go to a URL, wait
//! until something shows up, query elements, and read their text/attributes.
//! Queries return [`Node`] snapshots rather than live handles so the pipeline
//! never holds on to browser state between calls.

use std::{fmt, time::Duration};

use crate::error::SessionError;

/// CSS locator built from id/class pieces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locator(String);

impl Locator {
    pub fn id(id: &str) -> Self {
        Self(format!("#{id}"))
    }

    pub fn class(class: &str) -> Self {
        Self(format!(".{class}"))
    }

    pub fn css(sel: &str) -> Self {
        Self(sel.to_string())
    }

    /// Descendant of `self`.
    pub fn then(&self, child: &Locator) -> Self {
        Self(format!("{} {}", self.0, child.0))
    }

    pub fn as_css(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of one element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    pub text: String,
    pub attributes: Vec<(String, String)>,
}

impl Node {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub trait Session {
    /// Navigate and force a render, even if only the fragment changed.
    fn goto(&mut self, url: &str) -> Result<(), SessionError>;

    fn wait_for(&mut self, locator: &Locator, timeout: Duration) -> Result<(), SessionError>;

    /// All matches in document order; empty when nothing matches.
    fn query(&mut self, locator: &Locator) -> Result<Vec<Node>, SessionError>;

    /// For each match of `parent`, the matches of `child` inside it.
    fn query_within(
        &mut self,
        parent: &Locator,
        child: &Locator,
    ) -> Result<Vec<Vec<Node>>, SessionError>;
}
