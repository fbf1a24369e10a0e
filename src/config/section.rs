use crate::error::{AccessError, AccessResult};
use crate::tag::Tag;

/// Explicit section, then `DES_<TAG>_SECTION` when a tag is given.
pub fn resolve_section<F>(explicit: Option<&str>, tag: Option<&Tag>, env: F) -> AccessResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(section) = explicit.filter(|section| !section.is_empty()) {
        return Ok(section.to_string());
    }

    if let Some(tag) = tag {
        let var = tag.section_env_var();
        if let Some(section) = env(&var) {
            tracing::debug!(section = %section, var = %var, "using section from environment");
            return Ok(section);
        }
    }

    Err(AccessError::BadSection {
        section: explicit.map(str::to_string),
    })
}
