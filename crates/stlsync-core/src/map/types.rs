//! Component map types

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde_json::{Map, Value};

const FILENAME: &str = "filename";
const DUPLICATES: &str = "duplicates";

/// One model name's record in the component map
///
/// Entries are converted to and from JSON by hand rather than through a
/// flattened serde struct, so every field this tool does not manage keeps
/// its exact JSON value, numbers of any size included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentEntry {
    /// Canonical location, relative to the map file's directory
    pub filename: String,

    /// Further locations sharing the model name, in discovery order
    pub duplicates: Option<Vec<String>>,

    /// Fields this tool does not manage, carried through unchanged.
    /// An explicit `"duplicates": null` is kept here until a duplicate
    /// replaces it.
    pub extra: Map<String, Value>,
}

impl ComponentEntry {
    /// Create an entry with a canonical path and no duplicates
    #[must_use]
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            duplicates: None,
            extra: Map::new(),
        }
    }

    /// Build an entry from its JSON value in the map file
    ///
    /// # Errors
    ///
    /// Returns a description of the problem if the value is not an object,
    /// has no string `filename`, or has a `duplicates` that is neither
    /// `null` nor a list of strings.
    pub fn from_json(value: Value) -> Result<Self, String> {
        let Value::Object(mut fields) = value else {
            return Err("entry is not a JSON object".to_string());
        };

        let filename = match fields.remove(FILENAME) {
            Some(Value::String(filename)) => filename,
            Some(_) => return Err(format!("`{FILENAME}` is not a string")),
            None => return Err(format!("missing field `{FILENAME}`")),
        };

        let duplicates = match fields.remove(DUPLICATES) {
            None => None,
            Some(Value::Null) => {
                fields.insert(DUPLICATES.to_string(), Value::Null);
                None
            }
            Some(Value::Array(items)) => Some(
                items
                    .into_iter()
                    .map(|item| match item {
                        Value::String(path) => Ok(path),
                        _ => Err(format!("`{DUPLICATES}` holds a non-string value")),
                    })
                    .collect::<Result<Vec<_>, _>>()?,
            ),
            Some(_) => return Err(format!("`{DUPLICATES}` is not a list")),
        };

        Ok(Self {
            filename,
            duplicates,
            extra: fields,
        })
    }

    /// JSON value written to the map file for this entry
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut fields = self.extra.clone();
        fields.insert(FILENAME.to_string(), Value::String(self.filename.clone()));
        if let Some(duplicates) = &self.duplicates {
            fields.insert(
                DUPLICATES.to_string(),
                duplicates.iter().cloned().map(Value::String).collect(),
            );
        }
        Value::Object(fields)
    }

    /// Duplicate paths recorded so far
    #[must_use]
    pub fn duplicates(&self) -> &[String] {
        self.duplicates.as_deref().unwrap_or_default()
    }

    /// Whether `path` is already known for this entry
    #[must_use]
    pub fn knows(&self, path: &str) -> bool {
        self.filename == path || self.duplicates().iter().any(|d| d == path)
    }
}

/// What recording one discovered model did to the map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The name was not in the map; an entry was created
    NewModel,
    /// The name was known under another path; the path was appended to `duplicates`
    NewDuplicate,
    /// The path is already the entry's `filename`
    AlreadyIndexed,
    /// The path is already listed in `duplicates`
    KnownDuplicate,
}

/// In-memory component map, ordered by model name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentMap {
    entries: BTreeMap<String, ComponentEntry>,
}

impl ComponentMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct model names
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a model by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ComponentEntry> {
        self.entries.get(name)
    }

    /// Iterate entries in name order
    pub fn iter(&self) -> btree_map::Iter<'_, String, ComponentEntry> {
        self.entries.iter()
    }

    /// Insert or replace an entry as loaded from disk
    pub fn insert(&mut self, name: String, entry: ComponentEntry) {
        self.entries.insert(name, entry);
    }

    /// Record a model found at `path` (relative to the map directory)
    ///
    /// The first path recorded for a name stays its `filename`; any other
    /// path is appended to `duplicates` once.
    pub fn record(&mut self, name: &str, path: &str) -> RecordOutcome {
        let Some(entry) = self.entries.get_mut(name) else {
            self.entries
                .insert(name.to_string(), ComponentEntry::new(path));
            return RecordOutcome::NewModel;
        };

        if entry.knows(path) {
            return if entry.filename == path {
                RecordOutcome::AlreadyIndexed
            } else {
                RecordOutcome::KnownDuplicate
            };
        }

        entry
            .duplicates
            .get_or_insert_with(Vec::new)
            .push(path.to_string());
        RecordOutcome::NewDuplicate
    }
}

impl<'a> IntoIterator for &'a ComponentMap {
    type Item = (&'a String, &'a ComponentEntry);
    type IntoIter = btree_map::Iter<'a, String, ComponentEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
