use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::ser::{Serialize, SerializeMap, Serializer};

pub const RESOLVED_FILE: &str = "resolved_file";
pub const RESOLVED_SECTION: &str = "resolved_section";

/// Key/value pairs read from one section of a service access file, plus
/// the file and section they came from.
///
/// Keys are stored lowercase and looked up case-insensitively. A value of
/// `None` is the explicit "unset" marker: the key is present but carries no
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceProfile {
    entries: BTreeMap<String, Option<String>>,
    resolved_file: PathBuf,
    resolved_section: String,
}

impl ServiceProfile {
    /// Provenance keys in `entries` are dropped; the provenance fields win.
    pub fn new<I, K, V>(resolved_file: PathBuf, resolved_section: String, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Option<String>>,
    {
        let mut map = BTreeMap::new();
        for (key, value) in entries {
            let key = key.as_ref().to_ascii_lowercase();
            if is_provenance_key(&key) {
                tracing::warn!(key = %key, "ignoring reserved key in service section");
                continue;
            }
            map.insert(key, value.into());
        }

        Self {
            entries: map,
            resolved_file,
            resolved_section,
        }
    }

    pub fn resolved_file(&self) -> &Path {
        &self.resolved_file
    }

    pub fn resolved_section(&self) -> &str {
        &self.resolved_section
    }

    /// True when `key` is present, even if it holds the unset marker.
    pub fn contains_key(&self, key: &str) -> bool {
        let key = key.to_ascii_lowercase();
        is_provenance_key(&key) || self.entries.contains_key(&key)
    }

    /// Value of `key`; `None` when absent, unset, or (for `resolved_file`)
    /// not valid UTF-8.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key.to_ascii_lowercase().as_str() {
            RESOLVED_FILE => self.resolved_file.to_str(),
            RESOLVED_SECTION => Some(&self.resolved_section),
            other => self.entries.get(other)?.as_deref(),
        }
    }

    pub fn is_unset(&self, key: &str) -> bool {
        matches!(self.entries.get(&key.to_ascii_lowercase()), Some(None))
    }

    /// Section keys in sorted order followed by the two provenance keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .keys()
            .map(String::as_str)
            .chain([RESOLVED_FILE, RESOLVED_SECTION])
    }

    /// Section entries only, without provenance.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len() + 2
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub(crate) fn entry_mut(&mut self, key: &str) -> Option<&mut Option<String>> {
        self.entries.get_mut(key)
    }

    pub(crate) fn set_default(&mut self, key: &str, value: Option<String>) {
        self.entries.entry(key.to_string()).or_insert(value);
    }
}

pub(crate) fn is_provenance_key(key: &str) -> bool {
    key == RESOLVED_FILE || key == RESOLVED_SECTION
}

impl Serialize for ServiceProfile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(RESOLVED_FILE, &self.resolved_file.to_string_lossy())?;
        map.serialize_entry(RESOLVED_SECTION, &self.resolved_section)?;
        map.end()
    }
}
