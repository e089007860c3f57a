// file: src/error.rs
// version: 1.0.0
// guid: 3f1c9a2e-7b44-4d0e-9a61-2c8e5d7f0b13

//! Error types for gadb

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, GadbError>;

/// Error types for gadb
#[derive(Error, Debug)]
pub enum GadbError {
    #[error("cannot find adb: {0}")]
    BinaryNotFound(String),

    #[error("adb is not executable: {0}")]
    BinaryNotExecutable(String),

    #[error("{step} failed (exit code {}): {stderr}", describe_exit(.exit_code))]
    ExternalCommandFailed {
        step: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("{package} package not found: {stderr}")]
    PackageNotFound { package: String, stderr: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

impl GadbError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a failed-step error
    pub fn command_failed(
        step: impl Into<String>,
        exit_code: Option<i32>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::ExternalCommandFailed {
            step: step.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }

    /// Create a package-not-found error
    pub fn package_not_found(package: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::PackageNotFound {
            package: package.into(),
            stderr: stderr.into(),
        }
    }
}
