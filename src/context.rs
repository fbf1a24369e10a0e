use std::time::Duration;

use crate::cli::Cli;
use crate::config::{ResolutionInputs, RetryPolicy};
use crate::loader::Loader;
use crate::output::Output;
use crate::tag::Tag;

#[derive(Debug)]
pub struct AppContext {
    pub inputs: ResolutionInputs,
    pub loader: Loader,
    pub output: Output,
    pub check: bool,
    pub templates: Vec<String>,
}

impl AppContext {
    pub fn bootstrap(cli: Cli) -> Self {
        let Cli {
            file,
            section,
            tag,
            retry,
            attempts,
            retry_delay,
            check,
            json,
            verbose: _,
            templates,
        } = cli;

        let mut policy = RetryPolicy::from_retry(retry);
        if let Some(attempts) = attempts {
            policy = policy.with_max_attempts(attempts);
        }
        if let Some(secs) = retry_delay {
            policy = policy.with_delay(Duration::from_secs(secs));
        }

        let inputs = ResolutionInputs {
            file,
            section,
            tag: tag.as_deref().and_then(Tag::new),
            retry,
        };

        Self {
            inputs,
            loader: Loader::new(policy),
            output: Output::new(json),
            check,
            templates,
        }
    }
}
