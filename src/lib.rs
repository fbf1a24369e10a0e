//! Locate, parse and validate service access files: small INI-style files
//! holding connection parameters for named services.
//!
//! [`parse`] resolves which file and section to read, opens the file (with
//! optional retries for automounted filesystems) and returns a
//! [`ServiceProfile`]. [`check`] validates the file's permissions and, for
//! the `db` tag, the profile's keys.

pub mod app;
pub mod cli;
pub mod config;
pub mod context;
pub mod db;
pub mod error;
pub mod ini;
pub mod loader;
pub mod logging;
pub mod output;
pub mod profile;
pub mod tag;
pub mod template;
pub mod validate;

use std::path::Path;

use cli::Cli;
pub use config::{ResolutionInputs, RetryPolicy};
pub use error::{AccessError, AccessResult};
pub use loader::Loader;
pub use profile::ServiceProfile;
pub use tag::Tag;

/// Reads `section` of `file` with the ruleset of `tag`.
///
/// Missing or empty `file` and `section` fall back to `DES_SERVICES` /
/// `~/.desservices.ini` and `DES_<TAG>_SECTION`. With `retry` the open is
/// attempted five times, thirty seconds apart.
pub fn parse(
    file: Option<&Path>,
    section: Option<&str>,
    tag: Option<&str>,
    retry: bool,
) -> AccessResult<ServiceProfile> {
    let inputs = ResolutionInputs {
        file: file.map(Path::to_path_buf),
        section: section.map(str::to_string),
        tag: tag.and_then(Tag::new),
        retry,
    };
    parse_with(&inputs, &Loader::new(RetryPolicy::from_retry(retry)))
}

/// Validates `profile` against the file-permission rules and, for the `db`
/// tag (any case), the db key rules.
pub fn check(profile: &ServiceProfile, tag: Option<&str>) -> AccessResult<()> {
    validate::check(profile, tag.and_then(Tag::new).as_ref())
}

/// Resolves `inputs` against the process environment and loads with `loader`.
/// The loader's retry policy applies; `inputs.retry` is not consulted.
pub fn parse_with(inputs: &ResolutionInputs, loader: &Loader) -> AccessResult<ServiceProfile> {
    let resolution = config::resolve(inputs)?;
    loader.load(&resolution.file, &resolution.section, inputs.tag.as_ref())
}

pub fn run(cli: Cli) -> AccessResult<()> {
    app::run(cli)
}
