//! Defaults and field rules for profiles loaded with the `db` tag.

use crate::error::{AccessError, AccessResult};
use crate::profile::{RESOLVED_FILE, RESOLVED_SECTION, ServiceProfile};

pub const REQUIRED_KEYS: [&str; 5] = ["user", "passwd", "type", "port", "server"];
pub const OPTIONAL_KEYS: [&str; 3] = ["name", "sid", "service"];
pub const DEFAULT_TYPE: &str = "oracle";

pub fn default_port(db_type: &str) -> Option<&'static str> {
    match db_type {
        "oracle" => Some("1521"),
        "postgres" => Some("5432"),
        _ => None,
    }
}

pub fn is_allowed_key(key: &str) -> bool {
    REQUIRED_KEYS.contains(&key)
        || OPTIONAL_KEYS.contains(&key)
        || key == RESOLVED_FILE
        || key == RESOLVED_SECTION
}

/// Fills `type`, `sid`, `name` and `port` defaults. `type` always ends up
/// lowercase.
pub(crate) fn apply_defaults(profile: &mut ServiceProfile) {
    profile.set_default("type", Some(DEFAULT_TYPE.to_string()));

    let db_type = match profile.entry_mut("type") {
        Some(slot) => {
            let lowered = slot.as_deref().map(str::to_ascii_lowercase);
            *slot = lowered.clone();
            lowered
        }
        None => None,
    };

    profile.set_default("sid", None);
    profile.set_default("name", None);

    if let Some(port) = db_type.as_deref().and_then(default_port) {
        profile.set_default("port", Some(port.to_string()));
    }
}

/// Fails when a required key is missing or a key outside the db set is present.
pub fn check_fields(profile: &ServiceProfile) -> AccessResult<()> {
    let missing: Vec<String> = REQUIRED_KEYS
        .iter()
        .filter(|key| !profile.contains_key(key))
        .map(|key| key.to_string())
        .collect();
    let extra: Vec<String> = profile
        .keys()
        .filter(|key| !is_allowed_key(key))
        .map(str::to_string)
        .collect();

    if missing.is_empty() && extra.is_empty() {
        return Ok(());
    }

    tracing::debug!(?missing, ?extra, "db profile has faulty keys");
    Err(AccessError::InvalidFields { missing, extra })
}
