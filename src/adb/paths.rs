// file: src/adb/paths.rs
// version: 1.0.0
// guid: 5e0b7c13-9a2f-4d61-b8e4-3f7a1c0d9e26

//! Device path helpers. Device paths are POSIX regardless of the host OS.

/// Scratch directory on the device, wiped at the start of every transfer
pub const STAGING_DIR: &str = "/data/local/tmp/.gadb-tmp";

/// Last component of a device path, ignoring trailing slashes
pub fn remote_basename(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return if path.is_empty() { ".".to_string() } else { "/".to_string() };
    }
    match trimmed.rfind('/') {
        Some(index) => trimmed[index + 1..].to_string(),
        None => trimmed.to_string(),
    }
}

/// Parent directory of a device path
pub fn remote_parent(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) => "/".to_string(),
        Some(index) => trimmed[..index].to_string(),
        None if path.starts_with('/') => "/".to_string(),
        None => ".".to_string(),
    }
}

/// Where `name` lands inside the staging directory.
///
/// A name with no components (`/`) is the staging directory itself.
pub fn staging_path(name: &str) -> String {
    let name = name.trim_matches('/');
    if name.is_empty() {
        STAGING_DIR.to_string()
    } else {
        format!("{}/{}", STAGING_DIR, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_basename() {
        assert_eq!(remote_basename("/data/app.db"), "app.db");
        assert_eq!(remote_basename("/system/"), "system");
        assert_eq!(remote_basename("app.db"), "app.db");
        assert_eq!(remote_basename("/"), "/");
        assert_eq!(remote_basename(""), ".");
    }

    #[test]
    fn test_remote_parent() {
        assert_eq!(remote_parent("/data/data/com.example/db"), "/data/data/com.example");
        assert_eq!(remote_parent("/data/"), "/");
        assert_eq!(remote_parent("/file.txt"), "/");
        assert_eq!(remote_parent("/"), "/");
        assert_eq!(remote_parent("relative"), ".");
    }

    #[test]
    fn test_staging_path() {
        assert_eq!(staging_path("app.db"), "/data/local/tmp/.gadb-tmp/app.db");
    }

    #[test]
    fn test_staging_path_for_device_root() {
        assert_eq!(staging_path(&remote_basename("/")), STAGING_DIR);
        assert_eq!(staging_path(&remote_basename("//")), STAGING_DIR);
    }
}
