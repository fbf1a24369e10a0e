use std::path::{Path, PathBuf};

use crate::error::{AccessError, AccessResult};

pub const SERVICES_ENV: &str = "DES_SERVICES";
pub const HOME_ENV: &str = "HOME";
pub const DEFAULT_FILE_NAME: &str = ".desservices.ini";

/// Explicit path, then `DES_SERVICES`, then `$HOME/.desservices.ini`.
pub fn resolve_file<F>(explicit: Option<&Path>, env: F) -> AccessResult<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = explicit.filter(|path| !path.as_os_str().is_empty()) {
        tracing::debug!(path = %path.display(), "using explicit service access file");
        return Ok(path.to_path_buf());
    }

    if let Some(path) = env(SERVICES_ENV) {
        tracing::debug!(path = %path, "using service access file from {SERVICES_ENV}");
        return Ok(PathBuf::from(path));
    }

    let home = match env(HOME_ENV) {
        Some(home) => PathBuf::from(home),
        None => dirs::home_dir().ok_or_else(|| {
            AccessError::Config(format!(
                "{HOME_ENV} is not set and no home directory could be determined"
            ))
        })?,
    };

    let path = home.join(DEFAULT_FILE_NAME);
    tracing::debug!(path = %path.display(), "using default service access file");
    Ok(path)
}
