// file: src/adb/client.rs
// version: 1.0.0
// guid: a91f6d08-2c7e-4b35-9d40-e8b3c5f17a62

//! adb operations: remote commands, staged transfers and device queries

use super::paths::{remote_basename, remote_parent, staging_path, STAGING_DIR};
use super::runner::{CommandOutput, CommandRunner, Invocation};
use crate::{error::GadbError, Result};
use std::ffi::OsString;
use std::path::Path;
use tracing::{debug, info};

/// User that runs the privileged steps of a transfer
pub const ROOT_USER: &str = "root";

/// Owner given to staged files so the unprivileged `adb pull` can read them
pub const SHELL_OWNER: &str = "shell:shell";

/// Prefix printed by `pm path` before every APK path
pub const PACKAGE_PREFIX: &str = "package:";

/// adb operations on top of a command runner
#[derive(Debug, Clone)]
pub struct Adb<R> {
    runner: R,
}

/// Remote command line for `name args...`.
///
/// Words are joined with spaces and left for the device shell to interpret,
/// so pipes, globs and redirects given on the command line still work there.
pub fn remote_command_line<S: AsRef<str>>(name: &str, args: &[S]) -> String {
    let mut line = name.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg.as_ref());
    }
    line
}

/// argv for running `name args...` through `su <user> -c`
pub fn user_command_args<S: AsRef<str>>(user: &str, name: &str, args: &[S]) -> Vec<String> {
    let line = remote_command_line(name, args);
    vec![
        "shell".to_string(),
        "su".to_string(),
        user.to_string(),
        "-c".to_string(),
        shell_words::quote(&line).into_owned(),
    ]
}

/// argv for running `name args...` as the default shell user
pub fn command_args<S: AsRef<str>>(name: &str, args: &[S]) -> Vec<String> {
    vec!["shell".to_string(), remote_command_line(name, args)]
}

impl<R: CommandRunner> Adb<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run an invocation and fail on a non-zero exit.
    ///
    /// The returned error carries the step, exit code and stderr; the caller reports it.
    async fn run_checked(&self, invocation: Invocation) -> Result<CommandOutput> {
        let output = self.runner.run(&invocation).await?;
        if !output.success() {
            return Err(GadbError::command_failed(
                invocation.description,
                output.exit_code,
                output.stderr.trim(),
            ));
        }
        Ok(output)
    }

    /// Run `name args...` on the device as the default shell user
    pub async fn command<S: AsRef<str>>(&self, name: &str, args: &[S]) -> Result<()> {
        self.run_checked(Invocation::inherit(
            format!("shell {}", name),
            command_args(name, args),
        ))
        .await
        .map(drop)
    }

    /// Run `name args...` on the device as `user`
    pub async fn user_command<S: AsRef<str>>(&self, user: &str, name: &str, args: &[S]) -> Result<()> {
        self.run_checked(Invocation::inherit(
            format!("{} as {}", name, user),
            user_command_args(user, name, args),
        ))
        .await
        .map(drop)
    }

    async fn user_command_output<S: AsRef<str>>(
        &self,
        description: &str,
        user: &str,
        name: &str,
        args: &[S],
    ) -> Result<CommandOutput> {
        self.runner
            .run(&Invocation::capture(
                description,
                user_command_args(user, name, args),
            ))
            .await
    }

    /// Open an interactive shell on the device as `user`
    pub async fn shell(&self, user: &str) -> Result<()> {
        info!("Opening interactive shell as {}", user);
        let args = vec![
            "shell".to_string(),
            "-t".to_string(),
            "su".to_string(),
            user.to_string(),
        ];
        self.run_checked(Invocation::inherit("interactive shell", args))
            .await
            .map(drop)
    }

    /// Remove and recreate the staging directory.
    ///
    /// The directory is recreated by the shell user so it owns it.
    async fn reset_staging(&self) -> Result<()> {
        debug!("Resetting staging directory {}", STAGING_DIR);
        self.run_checked(Invocation::inherit(
            "remove staging directory",
            user_command_args(ROOT_USER, "rm", &["-rf", STAGING_DIR]),
        ))
        .await?;
        self.run_checked(Invocation::inherit(
            "create staging directory",
            command_args("mkdir", &["-p", STAGING_DIR]),
        ))
        .await
        .map(drop)
    }

    /// Copy `remote` from the device to `local`, whatever its permissions
    pub async fn pull(&self, remote: &str, local: &Path) -> Result<()> {
        info!("Pulling {} to {}", remote, local.display());

        self.reset_staging().await?;

        self.run_checked(Invocation::inherit(
            "copy to staging",
            user_command_args(ROOT_USER, "cp", &["-R", remote, STAGING_DIR]),
        ))
        .await?;

        self.run_checked(Invocation::inherit(
            "chown staging",
            user_command_args(ROOT_USER, "chown", &["-R", SHELL_OWNER, STAGING_DIR]),
        ))
        .await?;

        let staged = staging_path(&remote_basename(remote));
        self.run_checked(Invocation::inherit(
            "pull from staging",
            [
                OsString::from("pull"),
                OsString::from(staged),
                local.as_os_str().to_owned(),
            ],
        ))
        .await?;

        info!("Pulled {}", remote);
        Ok(())
    }

    async fn remote_file_exists(&self, remote: &str) -> Result<bool> {
        let output = self
            .user_command_output("check remote file", ROOT_USER, "test", &["-f", remote])
            .await?;
        Ok(output.success())
    }

    /// `owner:group` of a device path
    async fn ownership(&self, remote: &str) -> Result<String> {
        let output = self
            .user_command_output("read ownership", ROOT_USER, "stat", &["-c", "%U:%G", remote])
            .await?;
        let owner = output.stdout.trim();
        if !output.success() || owner.is_empty() {
            return Err(GadbError::command_failed(
                "read ownership",
                output.exit_code,
                output.stderr.trim(),
            ));
        }
        Ok(owner.to_string())
    }

    /// Copy `local` to `remote` on the device, keeping the ownership found there
    pub async fn push(&self, local: &Path, remote: &str) -> Result<()> {
        info!("Pushing {} to {}", local.display(), remote);

        // The staged name is spelled out again in a device command line
        let name = local
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| {
                GadbError::config(format!(
                    "{} has no UTF-8 file name to push",
                    local.display()
                ))
            })?;

        self.reset_staging().await?;

        self.run_checked(Invocation::inherit(
            "push to staging",
            [
                OsString::from("push"),
                local.as_os_str().to_owned(),
                OsString::from(STAGING_DIR),
            ],
        ))
        .await?;

        let ownership_source = if self.remote_file_exists(remote).await? {
            remote.to_string()
        } else {
            remote_parent(remote)
        };
        let owner = self.ownership(&ownership_source).await?;
        debug!("Ownership of {} is {}", ownership_source, owner);

        let staged = staging_path(&name);
        self.run_checked(Invocation::inherit(
            "copy from staging",
            user_command_args(ROOT_USER, "cp", &["-R", staged.as_str(), remote]),
        ))
        .await?;

        self.run_checked(Invocation::inherit(
            "restore ownership",
            user_command_args(ROOT_USER, "chown", &["-R", owner.as_str(), remote]),
        ))
        .await?;

        info!("Pushed {}", remote);
        Ok(())
    }

    /// Installed APK path(s) of `package`.
    ///
    /// Anything on stderr means the package is unknown, whatever the exit code.
    pub async fn package_path(&self, package: &str) -> Result<String> {
        let output = self
            .user_command_output("package path", ROOT_USER, "pm", &["path", package])
            .await?;

        let stderr = output.stderr.trim();
        if !stderr.is_empty() {
            return Err(GadbError::package_not_found(package, stderr));
        }
        if !output.success() {
            return Err(GadbError::command_failed(
                "package path",
                output.exit_code,
                stderr,
            ));
        }

        Ok(strip_package_prefix(&output.stdout))
    }

    async fn query(&self, description: &str, args: &[&str]) -> Result<String> {
        let invocation = Invocation::capture(description, args.iter().copied());
        let output = self.run_checked(invocation).await?;
        Ok(output.stdout.trim().to_string())
    }

    /// Serial number of the connected device
    pub async fn device_serial(&self) -> Result<String> {
        self.query("device serial", &["get-serialno"]).await
    }

    /// Product model of the connected device
    pub async fn device_model(&self) -> Result<String> {
        self.query("device model", &["shell", "getprop", "ro.product.model"])
            .await
    }
}

/// Strip `package:` from every line of `pm path` output
pub fn strip_package_prefix(stdout: &str) -> String {
    stdout
        .trim()
        .lines()
        .map(|line| {
            let line = line.trim();
            line.strip_prefix(PACKAGE_PREFIX).unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
