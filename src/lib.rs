//! Detects "command not found" failures in captured command output.
//!
//! The `detect-missing-tool` binary reads one command result from stdin and
//! prints a `<system-reminder>` advisory when a tool is missing. It always
//! runs with [`HookConfig::default`].
//!
//! Embedding hosts can drive [`MissingToolHook`] themselves and load a
//! [`HookConfig`] with [`HookConfig::from_toml_str`] or
//! [`HookConfig::load_from`] to change the advisory text or the diagnostic
//! verbosity.

pub mod advisory;
pub mod config;
pub mod console;
pub mod detection;
pub mod hook;
pub mod input;

pub use advisory::Advisory;
pub use config::{AdvisoryConfig, ConfigError, HookConfig};
pub use console::{Console, VerbosityLevel, console, init_console};
pub use detection::{
    MissingTool, Recognizer, RecognizerRegistry, UNKNOWN_TOOL, default_registry, detect, extract,
};
pub use hook::{HookError, MissingToolHook};
pub use input::{HookPayload, select_text};
