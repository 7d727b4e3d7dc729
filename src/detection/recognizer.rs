use regex::{Captures, Regex, RegexBuilder};

/// Tool name as it appears in shell diagnostics: word characters with inner
/// `.`, `+` or `-`, never ending in punctuation.
pub const TOOL_NAME: &str = r"\w(?:[\w.+-]*\w)?";

/// Result used when a failure phrase matched but no name could be isolated.
pub const UNKNOWN_TOOL: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTool {
    pub name: String,
    /// Label of the recognizer that fired
    pub recognizer: &'static str,
}

impl MissingTool {
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_TOOL
    }
}

/// One known phrasing of "tool X was not found".
#[derive(Debug, Clone)]
pub struct Recognizer {
    label: &'static str,
    pattern: Regex,
}

impl Recognizer {
    /// Compiles `pattern` case-insensitively. `{name}` expands to
    /// [`TOOL_NAME`].
    pub fn new(label: &'static str, pattern: &str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(&pattern.replace("{name}", TOOL_NAME))
            .case_insensitive(true)
            .build()?;
        Ok(Self { label, pattern })
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn matches(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Searches the whole text. A match always yields a result, falling back
    /// to [`UNKNOWN_TOOL`] when no group qualifies as a name.
    pub fn recognize(&self, text: &str) -> Option<MissingTool> {
        let captures = self.pattern.captures(text)?;
        let name = select_tool_name(&captures).unwrap_or(UNKNOWN_TOOL);

        Some(MissingTool {
            name: name.to_string(),
            recognizer: self.label,
        })
    }
}

/// First group that is non-empty and not all digits, in any script. Digit
/// groups are line numbers from shells like dash (`sh: 1: foo: not found`).
fn select_tool_name<'t>(captures: &Captures<'t>) -> Option<&'t str> {
    captures
        .iter()
        .skip(1)
        .flatten()
        .map(|group| group.as_str())
        .find(|group| !group.is_empty() && !group.chars().all(char::is_numeric))
}
