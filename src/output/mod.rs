pub mod json;
pub mod text;

use serde::Serialize;

use crate::error::AccessResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    /// Prints `text` in text mode, `value` as pretty JSON otherwise.
    pub fn emit<T: Serialize>(&self, text: &str, value: &T) -> AccessResult<()> {
        match self.mode {
            OutputMode::Text => text::print_block(text),
            OutputMode::Json => json::print(value),
        }
    }
}
