// file: src/config/mod.rs
// version: 1.0.0
// guid: 6c3d9e15-8f20-4b7a-91c4-d5e0a2b7f813

//! Configuration module for gadb
//!
//! Settings come from command-line flags, `GADB_*` environment variables and
//! an optional YAML file, in that order of precedence.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Device user used when nothing else selects one
pub const DEFAULT_DEVICE_USER: &str = "root";

/// Contents of the settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Device user for `shell`
    #[serde(default)]
    pub user: Option<String>,

    /// Local directory that `cache` mirrors devices into
    #[serde(default)]
    pub cache: Option<String>,
}

/// Effective settings after merging flags, environment and file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub user: String,
    pub cache: Option<PathBuf>,
}

impl Settings {
    /// Merge with values from the command line (which already include env).
    pub fn resolve(self, user: Option<String>, cache: Option<PathBuf>) -> Resolved {
        let user = user
            .filter(|u| !u.trim().is_empty())
            .or(self.user.filter(|u| !u.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_DEVICE_USER.to_string());

        let cache = cache
            .filter(|c| !c.as_os_str().is_empty())
            .or_else(|| {
                self.cache
                    .filter(|c| !c.trim().is_empty())
                    .map(|c| PathBuf::from(shellexpand::tilde(&c).into_owned()))
            });

        Resolved { user, cache }
    }
}
