// file: src/cache.rs
// version: 1.0.0
// guid: 9a4e1b76-3c05-4f28-8d97-b2f6c0e5a143

//! Mirroring device directories into a local cache

use crate::adb::{Adb, CommandRunner};
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Directory name for a device under the cache root
pub fn device_dir_name(model: &str, serial: &str) -> String {
    format!("{}-{}", model, serial)
}

/// Local destination of a device path inside a device directory
pub fn local_destination(device_dir: &Path, remote: &str) -> PathBuf {
    device_dir.join(remote.trim_start_matches('/'))
}

/// Pull every path in `roots` into `<cache_root>/<model>-<serial>`.
///
/// Returns the device directory. Stops at the first failed pull.
pub async fn cache_device<R: CommandRunner>(
    adb: &Adb<R>,
    cache_root: &Path,
    roots: &[String],
) -> Result<PathBuf> {
    let serial = adb.device_serial().await?;
    let model = adb.device_model().await?;

    let device_dir = cache_root.join(device_dir_name(&model, &serial));
    std::fs::create_dir_all(&device_dir)?;
    info!("Caching device {} into {}", serial, device_dir.display());

    for root in roots {
        let local = local_destination(&device_dir, root);
        if let Some(parent) = local.parent() {
            std::fs::create_dir_all(parent)?;
        }
        adb.pull(root, &local).await?;
    }

    Ok(device_dir)
}
