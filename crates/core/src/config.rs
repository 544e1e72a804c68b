use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

/// A named test environment managed by scenario-runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Scenario {
    pub name: String,

    /// External lint command for this scenario. An empty string disables linting.
    #[serde(default)]
    pub lint: String,

    /// Scenario-level environment overrides. These win over the ambient process
    /// environment on key collision.
    #[serde(default)]
    pub env: HashMap<String, String>,

    /// Interpret `lint` through the platform shell, so pipes and redirection in
    /// user-supplied commands work. With `false` the command string is split
    /// into an argv vector and spawned directly.
    #[serde(default = "default_via_shell")]
    pub via_shell: bool,
}

fn default_via_shell() -> bool {
    true
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            lint: String::new(),
            env: HashMap::new(),
            via_shell: true,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    pub fn scenario(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(".scenario-runner.json");
            if config_path.exists() {
                return Some(config_path);
            }

            let config_path = current.join("scenario-runner.json");
            if config_path.exists() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }
}
