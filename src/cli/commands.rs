// file: src/cli/commands.rs
// version: 1.0.0
// guid: b83f2d17-6a94-4c0e-b1d5-e72a9c4f6038

//! Command implementations for the CLI

use crate::{
    adb::{Adb, CommandRunner},
    cache,
    error::GadbError,
    Result,
};
use std::path::PathBuf;
use tracing::info;

/// Run a command as `user`, or open an interactive shell when none is given
pub async fn shell_command<R: CommandRunner>(
    adb: &Adb<R>,
    user: &str,
    command: &[String],
) -> Result<()> {
    match command.split_first() {
        None => adb.shell(user).await,
        Some((name, args)) => adb.user_command(user, name, args).await,
    }
}

/// Pull a device path, into the current directory unless told otherwise
pub async fn pull_command<R: CommandRunner>(
    adb: &Adb<R>,
    remote: &str,
    local: Option<PathBuf>,
) -> Result<()> {
    let local = match local {
        Some(local) => local,
        None => std::env::current_dir()?,
    };
    adb.pull(remote, &local).await
}

/// Push a local file to the device
pub async fn push_command<R: CommandRunner>(
    adb: &Adb<R>,
    local: PathBuf,
    remote: &str,
) -> Result<()> {
    if !local.exists() {
        return Err(GadbError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} does not exist", local.display()),
        )));
    }
    adb.push(&local, remote).await
}

/// Print the APK path of `package` to stdout
pub async fn ppath_command<R: CommandRunner>(adb: &Adb<R>, package: &str) -> Result<()> {
    let path = adb.package_path(package).await?;
    println!("{}", path);
    Ok(())
}

/// Mirror `roots` into the cache directory
pub async fn cache_command<R: CommandRunner>(
    adb: &Adb<R>,
    cache_root: Option<PathBuf>,
    roots: &[String],
) -> Result<()> {
    let cache_root = cache_root.ok_or_else(|| {
        GadbError::config("cache path must be set (either by --cache, GADB_CACHE or config)")
    })?;

    let device_dir = cache::cache_device(adb, &cache_root, roots).await?;
    info!("Device files cached in {}", device_dir.display());
    Ok(())
}
