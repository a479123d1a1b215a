//! Component map persistence
//!
//! The map is written as pretty-printed JSON with a one-space indent, `": "`
//! between keys and values, and keys sorted at every level, so successive
//! runs produce small, stable diffs under version control.
//!
//! Saving overwrites the file in place. An interruption mid-write can leave
//! a truncated map behind.
// TODO: write to a sibling temp file and rename over the map once partial
// writes need to be survivable.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use super::types::{ComponentEntry, ComponentMap};
use crate::error::{ModelRepoError, Result};

const INDENT: &[u8] = b" ";

/// Reads and writes component map files
pub struct MapStore;

impl MapStore {
    /// Load the map at `path`, or an empty map if the file does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON object,
    /// or holds an entry without a string `filename` or with a `duplicates`
    /// that is not a list of strings.
    pub fn load(path: &Path) -> Result<ComponentMap> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no map file yet, starting empty");
            return Ok(ComponentMap::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read map file: {}", path.display()))?;

        Self::parse(&content, path)
    }

    /// Parse map file content; `path` is only used in error messages
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a JSON object of entries.
    pub fn parse(content: &str, path: &Path) -> Result<ComponentMap> {
        let raw: Map<String, Value> =
            serde_json::from_str(content).map_err(|source| ModelRepoError::MalformedMap {
                path: path.to_path_buf(),
                source,
            })?;

        let mut map = ComponentMap::new();
        for (name, value) in raw {
            let entry =
                ComponentEntry::from_json(value).map_err(|reason| ModelRepoError::InvalidEntry {
                    path: path.to_path_buf(),
                    name: name.clone(),
                    reason,
                })?;
            map.insert(name, entry);
        }

        Ok(map)
    }

    /// Render the map in its on-disk format
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(map: &ComponentMap) -> Result<String> {
        let object: Map<String, Value> = map
            .iter()
            .map(|(name, entry)| (name.clone(), entry.to_json()))
            .collect();
        let sorted = sort_keys(Value::Object(object));

        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        sorted
            .serialize(&mut serializer)
            .context("Failed to serialize component map")?;

        String::from_utf8(buf).context("Serialized component map is not UTF-8")
    }

    /// Overwrite the map file at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(path: &Path, map: &ComponentMap) -> Result<()> {
        let json = Self::to_json(map)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write map file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), entries = map.len(), "map file written");
        Ok(())
    }
}

/// Rebuild every object in `value` with its keys in sorted order
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(object) => {
            let mut fields: Vec<(String, Value)> = object.into_iter().collect();
            fields.sort_by(|(a, _), (b, _)| a.cmp(b));
            Value::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, sort_keys(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
