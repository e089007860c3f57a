// file: src/config/loader.rs
// version: 1.0.0
// guid: 0f7a2c58-4e91-4d3b-b6a8-1e5c9d3f7024

//! Settings file loading and environment variable substitution

use super::Settings;
use crate::{error::GadbError, Result};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default settings file, relative to the home directory
pub const DEFAULT_CONFIG_FILE: &str = ".config/gadb/config.yaml";

/// Settings file location under the home directory, if there is one
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE))
}

/// Settings loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader that substitutes from the process environment
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.env_vars.insert(key.into(), value.into());
    }

    /// Load settings from an explicit file; the file must exist
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Settings> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            GadbError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        self.parse(&content)
    }

    /// Load the default settings file, treating a missing file as empty
    pub fn load_default(&self) -> Result<Settings> {
        match default_config_path() {
            Some(path) if path.is_file() => {
                debug!("Loading settings from {}", path.display());
                self.load(path)
            }
            _ => Ok(Settings::default()),
        }
    }

    /// Parse settings YAML after expanding `${VAR}` references
    pub fn parse(&self, content: &str) -> Result<Settings> {
        if content.trim().is_empty() {
            return Ok(Settings::default());
        }
        let expanded = self.expand_env_vars(content)?;
        let settings: Settings = serde_yaml::from_str(&expanded)?;
        Ok(settings)
    }

    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| GadbError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            if let Some(value) = self.env_vars.get(var_name) {
                result = result.replace(placeholder, value);
            } else if !missing_vars.iter().any(|m| m == var_name) {
                missing_vars.push(var_name.to_string());
            }
        }

        if !missing_vars.is_empty() {
            return Err(GadbError::config(format!(
                "Missing environment variables: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }
}
