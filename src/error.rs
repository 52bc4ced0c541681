// src/error.rs
use std::{io, path::PathBuf, time::Duration};

use thiserror::Error;

use crate::config::{ItemId, SpellId};

/// Failures raised by a rendering session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("timed out after {timeout:?} waiting for `{locator}`")]
    Timeout { locator: String, timeout: Duration },

    #[error("invalid selector `{0}`")]
    Selector(String),

    #[error("navigation to {url} failed: {reason}")]
    Navigation { url: String, reason: String },

    #[error("browser error: {0}")]
    Browser(String),
}

#[derive(Debug, Error)]
pub enum NetError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Enumeration failures. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum EnumerateError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("listing has no result count")]
    MissingTotal,

    #[error("unreadable result count `{0}`")]
    BadTotal(String),

    #[error("row {row} on page {page} has no item link")]
    MissingLink { page: usize, row: usize },
}

/// Per-candidate failures. Logged, the candidate is dropped, the run goes on.
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("tooltip request for item {item} failed: {reason}")]
    Fetch { item: ItemId, reason: String },

    #[error("only {found} embedded spell ids, need {required}")]
    TooFewEmbedded { found: usize, required: usize },

    #[error("no related spell ids found for spell {base}")]
    NoRelated { base: SpellId },

    #[error("no related spell section on page of spell {base}")]
    LookupAbsent { base: SpellId },

    #[error("related spell link `{href}` of spell {base} has no id")]
    BadRelatedLink { base: SpellId, href: String },

    #[error("lookup of spell {base} failed: {source}")]
    Session {
        base: SpellId,
        #[source]
        source: SessionError,
    },
}

#[derive(Debug, Error)]
pub enum OverrideError {
    #[error("cannot read override table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
