// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Map, Serializer, Value};

use crate::error::ExportError;
use crate::scrape::{Described, ResolvedRecord};

/* ---------------- Rune records ---------------- */

/// `effect,payload` per record, newline-joined (no trailing newline).
/// Payloads go out verbatim: no quoting, no escaping.
pub fn records_to_string(records: &[ResolvedRecord]) -> String {
    records
        .iter()
        .map(|r| format!("{},{}", r.effect, r.payload))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn write_records(path: &Path, records: &[ResolvedRecord]) -> Result<PathBuf, ExportError> {
    ensure_parent(path)?;
    fs::write(path, records_to_string(records))?;
    Ok(path.to_path_buf())
}

/* ---------------- Enchant descriptions ---------------- */

/// Tab-indented JSON object `{ "<effect id>": "<description>" }`, input order.
pub fn descriptions_to_json(described: &[Described]) -> Result<String, ExportError> {
    let map: Map<String, Value> = described
        .iter()
        .map(|d| (d.effect_id.to_string(), Value::String(d.description.clone())))
        .collect();

    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    map.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn write_descriptions(path: &Path, described: &[Described]) -> Result<PathBuf, ExportError> {
    ensure_parent(path)?;
    fs::write(path, descriptions_to_json(described)?)?;
    Ok(path.to_path_buf())
}

/* ---------------- Paths ---------------- */

fn ensure_parent(path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
