use crate::advisory::Advisory;
use crate::config::HookConfig;
use crate::console::console;
use crate::detection::{MissingTool, RecognizerRegistry};
use crate::input::select_text;
use std::borrow::Cow;
use std::io::{Read, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("Failed to read hook input: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write advisory: {0}")]
    Write(#[source] std::io::Error),
}

pub type HookResult<T> = Result<T, HookError>;

/// Reads the whole stream. Invalid UTF-8 is replaced rather than rejected.
pub fn read_input<R: Read>(mut reader: R) -> HookResult<String> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer).map_err(HookError::Read)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

pub struct MissingToolHook<'a> {
    registry: &'a RecognizerRegistry,
    config: HookConfig,
}

impl<'a> MissingToolHook<'a> {
    pub fn new(registry: &'a RecognizerRegistry, config: HookConfig) -> Self {
        Self { registry, config }
    }

    /// Classifies one captured command result, raw or as a hook payload.
    pub fn inspect(&self, input: &str) -> Option<MissingTool> {
        if input.is_empty() {
            return None;
        }

        let text = select_text(input);
        match &text {
            Cow::Owned(_) => console().verbose("Classifying hook payload field"),
            Cow::Borrowed(_) => console().verbose("Classifying raw input"),
        }
        console().debug(&format!("Classifying {} bytes", text.len()));
        self.registry.detect(&text)
    }

    /// Reads `reader` to the end and writes at most one advisory to `writer`.
    pub fn run<R: Read, W: Write>(
        &self,
        reader: R,
        mut writer: W,
    ) -> HookResult<Option<MissingTool>> {
        let input = read_input(reader)?;

        let Some(tool) = self.inspect(&input) else {
            console().debug("No missing tool detected");
            return Ok(None);
        };

        console().detection(&tool.name, tool.recognizer);

        let advisory = Advisory::new(&tool.name, &self.config.advisory);
        writeln!(writer, "{}", advisory).map_err(HookError::Write)?;
        writer.flush().map_err(HookError::Write)?;

        Ok(Some(tool))
    }
}
