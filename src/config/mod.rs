pub mod paths;
pub mod retry;
pub mod section;

use std::path::PathBuf;

pub use paths::resolve_file;
pub use retry::RetryPolicy;
pub use section::resolve_section;

use crate::error::AccessResult;
use crate::tag::Tag;

/// Caller-supplied overrides for a single `parse` call.
#[derive(Debug, Clone, Default)]
pub struct ResolutionInputs {
    pub file: Option<PathBuf>,
    pub section: Option<String>,
    pub tag: Option<Tag>,
    pub retry: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub file: PathBuf,
    pub section: String,
}

/// Resolves file and section against the process environment.
pub fn resolve(inputs: &ResolutionInputs) -> AccessResult<Resolution> {
    resolve_with(inputs, process_env)
}

/// Like [`resolve`], reading variables through `env` instead of the process.
/// Never touches the filesystem.
pub fn resolve_with<F>(inputs: &ResolutionInputs, env: F) -> AccessResult<Resolution>
where
    F: Fn(&str) -> Option<String>,
{
    let section = resolve_section(inputs.section.as_deref(), inputs.tag.as_ref(), &env)?;
    let file = resolve_file(inputs.file.as_deref(), &env)?;
    Ok(Resolution { file, section })
}

/// Process environment lookup; unset, empty and non-UTF-8 values are absent.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
