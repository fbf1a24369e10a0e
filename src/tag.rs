use std::fmt;

/// Case-insensitive service classifier such as `db`.
///
/// The tag picks the environment variable that names the default section
/// and the defaulting/validation ruleset applied to a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ruleset {
    Db,
    Generic,
}

impl Tag {
    /// Returns `None` for an empty or whitespace-only tag.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn ruleset(&self) -> Ruleset {
        match self.0.as_str() {
            "db" => Ruleset::Db,
            _ => Ruleset::Generic,
        }
    }

    pub fn is_db(&self) -> bool {
        self.ruleset() == Ruleset::Db
    }

    /// Name of the variable holding the default section, e.g. `DES_DB_SECTION`.
    pub fn section_env_var(&self) -> String {
        format!("DES_{}_SECTION", self.0.to_ascii_uppercase())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub(crate) fn is_db(tag: Option<&Tag>) -> bool {
    tag.is_some_and(Tag::is_db)
}
