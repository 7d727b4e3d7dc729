use super::recognizer::{MissingTool, Recognizer};
use std::sync::OnceLock;

/// Known phrasings, most specific first. The first one that matches wins, so
/// a phrase that is a substring of another must come after it.
const RECOGNIZERS: &[(&str, &str)] = &[
    ("zsh", r"zsh: command not found: ({name})"),
    ("posix-shell", r"({name}): command not found"),
    ("bash-no-such-file", r"bash: ({name}): No such file or directory"),
    ("sh-numbered", r"sh: (\d+): ({name}): not found"),
    ("powershell", r"The term '({name})' is not recognized"),
    ("cmd", r"'({name})' is not recognized"),
    ("process-launch", r#"Cannot run program "({name})""#),
    ("not-found-prefix", r"not found: ({name})"),
    ("not-found-suffix", r"({name}): not found"),
    ("generic", r"command not found"),
];

#[derive(Debug)]
pub struct RecognizerRegistry {
    recognizers: Vec<Recognizer>,
}

impl RecognizerRegistry {
    pub fn new() -> Self {
        let recognizers = RECOGNIZERS
            .iter()
            .map(|&(label, pattern)| {
                Recognizer::new(label, pattern).expect("Failed to compile built-in recognizer")
            })
            .collect();

        Self { recognizers }
    }

    /// Registry with a caller-supplied order, tried exactly as given.
    pub fn with_recognizers(recognizers: Vec<Recognizer>) -> Self {
        Self { recognizers }
    }

    pub fn recognizers(&self) -> &[Recognizer] {
        &self.recognizers
    }

    pub fn detect(&self, text: &str) -> Option<MissingTool> {
        self.recognizers
            .iter()
            .find_map(|recognizer| recognizer.recognize(text))
    }

    /// `None` when nothing matched; `Some("unknown")` when a phrase matched
    /// without a usable name.
    pub fn extract(&self, text: &str) -> Option<String> {
        self.detect(text).map(|tool| tool.name)
    }
}

impl Default for RecognizerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared, read-only registry built on first use.
pub fn default_registry() -> &'static RecognizerRegistry {
    static REGISTRY: OnceLock<RecognizerRegistry> = OnceLock::new();
    REGISTRY.get_or_init(RecognizerRegistry::new)
}

pub fn detect(text: &str) -> Option<MissingTool> {
    default_registry().detect(text)
}

pub fn extract(text: &str) -> Option<String> {
    default_registry().extract(text)
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
