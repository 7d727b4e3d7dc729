use crate::config::AdvisoryConfig;
use std::fmt;

/// Hint block emitted to the harness when a missing tool is detected.
#[derive(Debug, Clone)]
pub struct Advisory<'a> {
    tool_name: &'a str,
    config: &'a AdvisoryConfig,
}

impl<'a> Advisory<'a> {
    pub fn new(tool_name: &'a str, config: &'a AdvisoryConfig) -> Self {
        Self { tool_name, config }
    }

    pub fn tool_name(&self) -> &str {
        self.tool_name
    }
}

impl fmt::Display for Advisory<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tool = self.tool_name;
        let skill = &self.config.skill;

        writeln!(f, "<system-reminder>")?;
        writeln!(f, "Detected missing tool: '{}'", tool)?;
        writeln!(f)?;
        writeln!(f, "The {} skill can help install this tool. Consider:", skill)?;
        writeln!(
            f,
            "1. Use the {} skill to check if '{}' is in the catalog",
            skill, tool
        )?;
        writeln!(f, "2. Install via: the skill's installation workflow")?;

        if !self.config.quick_reference.is_empty() {
            writeln!(f)?;
            writeln!(f, "Quick reference - common tools in catalog:")?;
            for line in &self.config.quick_reference {
                writeln!(f, "- {}", line)?;
            }
        }

        write!(f, "</system-reminder>")
    }
}
