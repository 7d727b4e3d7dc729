use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;

/// Fields the harness may send instead of raw text. Values are kept loose so
/// a `null` or a number in one field does not reject the others.
#[derive(Debug, Default, Deserialize)]
pub struct HookPayload {
    #[serde(default)]
    pub output: Option<Value>,
    #[serde(default)]
    pub stdout: Option<Value>,
    #[serde(default)]
    pub stderr: Option<Value>,
}

impl HookPayload {
    /// Parses `raw` as a JSON object. Anything else, including valid JSON that
    /// is not an object, is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let value: Value = serde_json::from_str(raw).ok()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// First non-empty string among `output`, `stdout`, `stderr`, or `""`
    /// when every string field is empty. `None` only when no field holds a
    /// string. Fields are never concatenated.
    pub fn text(&self) -> Option<&str> {
        let strings: Vec<&str> = [&self.output, &self.stdout, &self.stderr]
            .into_iter()
            .filter_map(|field| field.as_ref().and_then(Value::as_str))
            .collect();

        strings
            .iter()
            .copied()
            .find(|text| !text.is_empty())
            .or_else(|| strings.first().copied())
    }
}

/// The text to classify: the payload's preferred field, or `raw` unchanged.
pub fn select_text(raw: &str) -> Cow<'_, str> {
    match HookPayload::parse(raw).as_ref().and_then(HookPayload::text) {
        Some(text) => Cow::Owned(text.to_string()),
        None => Cow::Borrowed(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_text_passes_through() {
        let raw = "zsh: command not found: rg";
        assert!(matches!(select_text(raw), Cow::Borrowed(text) if text == raw));
    }

    #[test]
    fn test_output_field_preferred() {
        let raw = r#"{"stderr": "c", "stdout": "b", "output": "a"}"#;
        assert_eq!(select_text(raw), "a");
    }

    #[test]
    fn test_stdout_before_stderr() {
        let raw = r#"{"stderr": "c", "stdout": "b"}"#;
        assert_eq!(select_text(raw), "b");
    }

    #[test]
    fn test_stderr_used_alone() {
        let raw = r#"{"stderr": "zsh: command not found: fzf"}"#;
        assert_eq!(select_text(raw), "zsh: command not found: fzf");
    }

    #[test]
    fn test_fields_are_not_concatenated() {
        let raw = r#"{"stdout": "partial", "stderr": "sh: 1: jq: not found"}"#;
        assert_eq!(select_text(raw), "partial");
    }

    #[test]
    fn test_empty_field_falls_through() {
        let raw = r#"{"output": "", "stdout": "", "stderr": "b"}"#;
        assert_eq!(select_text(raw), "b");
    }

    #[test]
    fn test_non_string_fields_are_skipped() {
        let raw = r#"{"output": null, "stdout": 42, "stderr": "b"}"#;
        assert_eq!(select_text(raw), "b");
    }

    #[test]
    fn test_object_without_fields_uses_raw() {
        let raw = r#"{"exit_code": 127}"#;
        assert_eq!(select_text(raw), raw);
    }

    #[test]
    fn test_non_object_json_uses_raw() {
        for raw in [r#"["zsh: command not found: rg"]"#, "\"text\"", "127", "null"] {
            assert!(HookPayload::parse(raw).is_none(), "parsed {:?}", raw);
            assert_eq!(select_text(raw), raw);
        }
    }

    #[test]
    fn test_malformed_json_uses_raw() {
        let raw = r#"{"stdout": "unterminated"#;
        assert_eq!(select_text(raw), raw);
    }

    #[test]
    fn test_escapes_are_decoded() {
        let raw = r#"{"stdout": "line one\nzsh: command not found: rg"}"#;
        assert_eq!(select_text(raw), "line one\nzsh: command not found: rg");
    }

    #[test]
    fn test_payload_text_none_without_fields() {
        let payload = HookPayload::default();
        assert!(payload.text().is_none());
    }

    #[test]
    fn test_all_empty_fields_yield_empty_text() {
        let raw = r#"{"command": "grep 'not found: x' app.log", "stdout": "", "stderr": ""}"#;
        assert_eq!(select_text(raw), "");

        let payload = HookPayload::parse(raw).unwrap();
        assert_eq!(payload.text(), Some(""));
    }

    #[test]
    fn test_empty_field_beside_non_string_yields_empty_text() {
        let raw = r#"{"output": null, "stdout": "", "stderr": 3}"#;
        assert_eq!(select_text(raw), "");
    }
}
