// file: src/adb/locator.rs
// version: 1.0.0
// guid: 8d2e4b71-0c9f-4a3e-b5d6-71f0e2a94c58

//! Locating the adb binary

use crate::{error::GadbError, Result};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an adb binary to use instead of a PATH search
pub const ADB_PATH_ENV: &str = "ADB_PATH";

/// Name searched for on PATH
pub const DEFAULT_ADB_NAME: &str = "adb";

/// Resolved path of the adb executable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdbBinary(PathBuf);

impl AdbBinary {
    /// Wrap an already validated path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for AdbBinary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Resolve adb from `ADB_PATH` or the process PATH
pub fn resolve() -> Result<AdbBinary> {
    let override_path = std::env::var_os(ADB_PATH_ENV);
    locate(override_path.as_deref(), std::env::var_os("PATH"))
}

/// Resolve adb from an explicit override and search path.
///
/// An empty override counts as unset.
pub fn locate(override_path: Option<&OsStr>, search_path: Option<OsString>) -> Result<AdbBinary> {
    if let Some(custom) = override_path.filter(|p| !p.is_empty()) {
        return check_override(Path::new(custom));
    }

    let cwd = std::env::current_dir()?;
    let found = which::which_in(DEFAULT_ADB_NAME, search_path, cwd).map_err(|_| {
        GadbError::BinaryNotFound(format!(
            "'{}' is neither on PATH nor set by {}, is it installed?",
            DEFAULT_ADB_NAME, ADB_PATH_ENV
        ))
    })?;

    debug!("Found adb on PATH: {}", found.display());
    Ok(AdbBinary(found))
}

fn check_override(path: &Path) -> Result<AdbBinary> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GadbError::BinaryNotFound(format!(
                "{} points to {} which does not exist",
                ADB_PATH_ENV,
                path.display()
            ))
        } else {
            GadbError::BinaryNotExecutable(format!("{} error: {}", ADB_PATH_ENV, e))
        }
    })?;

    if !metadata.is_file() || !has_exec_bit(&metadata) {
        return Err(GadbError::BinaryNotExecutable(format!(
            "adb path set by {} ({}), but the file is not executable",
            ADB_PATH_ENV,
            path.display()
        )));
    }

    debug!("Using adb from {}: {}", ADB_PATH_ENV, path.display());
    Ok(AdbBinary(path.to_path_buf()))
}

#[cfg(unix)]
fn has_exec_bit(metadata: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn has_exec_bit(_metadata: &std::fs::Metadata) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[cfg(unix)]
    fn write_file(dir: &Path, name: &str, mode: u32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        std::fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[test]
    fn test_override_missing_path_is_not_found() {
        // Arrange
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("adb");

        // Act
        let result = locate(Some(missing.as_os_str()), None);

        // Assert
        assert!(matches!(result, Err(GadbError::BinaryNotFound(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_override_non_executable_file() {
        // Arrange
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(temp_dir.path(), "adb", 0o644);

        // Act
        let result = locate(Some(path.as_os_str()), None);

        // Assert
        assert!(matches!(result, Err(GadbError::BinaryNotExecutable(_))));
    }

    #[test]
    fn test_override_directory_is_not_executable() {
        let temp_dir = TempDir::new().unwrap();

        let result = locate(Some(temp_dir.path().as_os_str()), None);

        assert!(matches!(result, Err(GadbError::BinaryNotExecutable(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_override_executable_file_is_used() {
        // Arrange
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(temp_dir.path(), "my-adb", 0o755);

        // Act
        let binary = locate(Some(path.as_os_str()), None).unwrap();

        // Assert
        assert_eq!(binary.path(), path.as_path());
    }

    #[test]
    fn test_missing_from_search_path() {
        // Arrange
        let temp_dir = TempDir::new().unwrap();
        let search_path = Some(temp_dir.path().as_os_str().to_owned());

        // Act
        let result = locate(None, search_path);

        // Assert
        assert!(matches!(result, Err(GadbError::BinaryNotFound(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_found_on_search_path_when_override_empty() {
        // Arrange
        let temp_dir = TempDir::new().unwrap();
        let path = write_file(temp_dir.path(), "adb", 0o755);
        let search_path = Some(temp_dir.path().as_os_str().to_owned());

        // Act
        let binary = locate(Some(OsStr::new("")), search_path).unwrap();

        // Assert
        assert_eq!(binary.path(), path.as_path());
    }
}
