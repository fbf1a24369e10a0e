pub mod hooks;

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

pub use hooks::{AutomountNudge, ListingNudge, NoNudge, Sleeper, ThreadSleeper};

use crate::config::RetryPolicy;
use crate::db;
use crate::error::{AccessError, AccessResult};
use crate::ini::IniDocument;
use crate::profile::ServiceProfile;
use crate::tag::{self, Tag};

/// Opens and parses a resolved service access file, retrying the open on
/// slow automounted filesystems.
pub struct Loader {
    policy: RetryPolicy,
    sleeper: Box<dyn Sleeper>,
    nudge: Box<dyn AutomountNudge>,
}

impl Loader {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            sleeper: Box::new(ThreadSleeper),
            nudge: Box::new(ListingNudge),
        }
    }

    pub fn with_sleeper(mut self, sleeper: impl Sleeper + 'static) -> Self {
        self.sleeper = Box::new(sleeper);
        self
    }

    pub fn with_nudge(mut self, nudge: impl AutomountNudge + 'static) -> Self {
        self.nudge = Box::new(nudge);
        self
    }

    /// Reads `section` from `path` and applies the ruleset selected by `tag`.
    pub fn load(&self, path: &Path, section: &str, tag: Option<&Tag>) -> AccessResult<ServiceProfile> {
        let file = self.open_with_retry(path)?;
        let text = read_text(file, path)?;
        let document = IniDocument::parse(&text, path)?;

        let items = document
            .items(section)
            .ok_or_else(|| AccessError::NoSuchSection {
                section: section.to_string(),
                path: path.to_path_buf(),
            })?;

        let mut profile = ServiceProfile::new(
            path.to_path_buf(),
            section.to_string(),
            items.into_iter().map(|(key, value)| (key, Some(value))),
        );
        if tag::is_db(tag) {
            db::apply_defaults(&mut profile);
        }

        tracing::debug!(
            path = %path.display(),
            section,
            keys = profile.len(),
            "loaded service profile"
        );
        Ok(profile)
    }

    fn open_with_retry(&self, path: &Path) -> AccessResult<File> {
        let attempts = self.policy.max_attempts();
        let delay = self.policy.delay();
        let mut attempt = 1;

        loop {
            match open_regular(path) {
                Ok(file) => return Ok(file),
                Err(source) if attempt >= attempts => {
                    return Err(AccessError::FileNotFound {
                        path: path.to_path_buf(),
                        source,
                    });
                }
                Err(err) => {
                    tracing::warn!(
                        attempt,
                        attempts,
                        path = %path.display(),
                        error = %err,
                        delay_secs = delay.as_secs_f64(),
                        "cannot open service access file, retrying"
                    );
                    self.nudge.nudge(path);
                    self.sleeper.sleep(delay);
                    attempt += 1;
                }
            }
        }
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(RetryPolicy::default())
    }
}

impl std::fmt::Debug for Loader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader").field("policy", &self.policy).finish_non_exhaustive()
    }
}

/// Opening a directory succeeds on unix; it counts as a failed open here.
fn open_regular(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::IsADirectory,
            format!("{} is a directory", path.display()),
        ));
    }
    Ok(file)
}

fn read_text(mut file: File, path: &Path) -> AccessResult<String> {
    let mut text = String::new();
    file.read_to_string(&mut text).map_err(|source| AccessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text)
}
