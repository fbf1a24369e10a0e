//! Parser for the section-headed `key = value` text format of service
//! access files.
//!
//! Grammar:
//! - `[name]` opens a section; repeated headers merge into one section and
//!   anything after the closing bracket is ignored.
//! - `key = value` or `key: value`; the first `=` or `:` splits the line.
//!   Keys are lowercased, keys and values are whitespace-trimmed.
//! - A line whose first non-blank character is `;` or `#` is a comment.
//! - If the first `;` of a value is preceded by whitespace it starts a
//!   comment. A first `;` glued onto the value keeps the whole rest of the
//!   line in the value, later `;` included.
//! - The last occurrence of a key wins.
//! - `[DEFAULT]` keys apply to every section that does not set them; asking
//!   for `DEFAULT` itself yields just those keys.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{AccessError, AccessResult};

pub const DEFAULT_SECTION: &str = "DEFAULT";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    defaults: BTreeMap<String, String>,
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl IniDocument {
    /// `path` only labels syntax errors.
    pub fn parse(text: &str, path: &Path) -> AccessResult<Self> {
        let mut document = Self::default();
        let mut current: Option<String> = None;

        for (index, raw_line) in text.lines().enumerate() {
            let line_no = index + 1;
            let syntax = |message| AccessError::Syntax {
                path: path.to_path_buf(),
                line: line_no,
                message,
            };

            let line = raw_line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                // text after the closing bracket is ignored
                let close = rest
                    .rfind(']')
                    .ok_or_else(|| syntax("unterminated section header"))?;
                let name = rest[..close].trim();
                if name.is_empty() {
                    return Err(syntax("empty section name"));
                }

                if name != DEFAULT_SECTION {
                    document.sections.entry(name.to_string()).or_default();
                }
                current = Some(name.to_string());
                continue;
            }

            let Some(section) = current.as_deref() else {
                return Err(syntax("key/value line before any section header"));
            };

            let split = line
                .find(['=', ':'])
                .ok_or_else(|| syntax("expected `key = value`"))?;
            let key = line[..split].trim();
            if key.is_empty() {
                return Err(syntax("empty key"));
            }
            let value = strip_inline_comment(&line[split + 1..]).trim();

            let target = if section == DEFAULT_SECTION {
                &mut document.defaults
            } else {
                document.sections.entry(section.to_string()).or_default()
            };
            target.insert(key.to_ascii_lowercase(), value.to_string());
        }

        Ok(document)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Keys of `name` merged over `[DEFAULT]`, or `None` if the section is absent.
    pub fn items(&self, name: &str) -> Option<BTreeMap<String, String>> {
        if name == DEFAULT_SECTION {
            return Some(self.defaults.clone());
        }

        let section = self.sections.get(name)?;
        let mut merged = self.defaults.clone();
        merged.extend(section.iter().map(|(k, v)| (k.clone(), v.clone())));
        Some(merged)
    }
}

fn strip_inline_comment(value: &str) -> &str {
    match value.find(';') {
        Some(pos) if value[..pos].ends_with(char::is_whitespace) => &value[..pos],
        _ => value,
    }
}
