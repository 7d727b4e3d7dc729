mod error;

pub use error::{ConfigError, ConfigResult};

use crate::console::VerbosityLevel;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

pub const DEFAULT_SKILL: &str = "cli-tools";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AdvisoryConfig {
    /// Skill the advisory points the harness at
    #[serde(default = "default_skill")]
    pub skill: String,
    /// One line of catalog examples per entry
    #[serde(default = "default_quick_reference")]
    pub quick_reference: Vec<String>,
}

fn default_skill() -> String {
    DEFAULT_SKILL.to_string()
}

fn default_quick_reference() -> Vec<String> {
    [
        "ripgrep (rg), fd, jq, yq, fzf, bat, eza",
        "docker, kubectl, terraform, ansible",
        "node, npm, pnpm, bun, deno",
        "python, pip, poetry, uv",
        "go, rust/cargo, php/composer",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            skill: default_skill(),
            quick_reference: default_quick_reference(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct HookConfig {
    #[serde(default)]
    pub verbosity: Option<String>,
    #[serde(default)]
    pub advisory: AdvisoryConfig,
}

impl HookConfig {
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.advisory.skill.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "advisory.skill".to_string(),
                value: self.advisory.skill.clone(),
            });
        }
        Ok(())
    }

    /// Get the configured verbosity level, falling back to Normal if not set
    pub fn get_verbosity(&self) -> VerbosityLevel {
        self.verbosity
            .as_ref()
            .and_then(|v| match v.as_str() {
                "normal" => Some(VerbosityLevel::Normal),
                "verbose" => Some(VerbosityLevel::Verbose),
                "debug" => Some(VerbosityLevel::Debug),
                _ => None,
            })
            .unwrap_or(VerbosityLevel::Normal)
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = Some(verbosity.to_string());
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
