// file: src/adb/runner.rs
// version: 1.0.0
// guid: c47a1e90-5b3d-4f82-8e16-0a9d3b6c2f71

//! Spawning adb and collecting its results

use super::locator::AdbBinary;
use crate::{error::GadbError, Result};
use std::ffi::OsString;
use std::future::Future;
use std::process::Stdio as ProcessStdio;
use tokio::process::Command;
use tracing::debug;

/// How a spawned adb process is wired to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stdio {
    /// stdin, stdout and stderr are passed through from gadb
    Inherit,
    /// stdout and stderr are captured separately, stdin is closed
    Capture,
}

/// One adb invocation: a step label plus the arguments after the binary path.
///
/// Arguments are OS strings so local paths reach adb byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub description: String,
    pub args: Vec<OsString>,
    pub stdio: Stdio,
}

impl Invocation {
    pub fn new<I, S>(description: impl Into<String>, args: I, stdio: Stdio) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            description: description.into(),
            args: args.into_iter().map(Into::into).collect(),
            stdio,
        }
    }

    /// Invocation with streams passed through
    pub fn inherit<I, S>(description: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self::new(description, args, Stdio::Inherit)
    }

    /// Invocation with output captured
    pub fn capture<I, S>(description: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self::new(description, args, Stdio::Capture)
    }
}

/// What came back from an invocation. Inherited runs leave both strings empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs adb invocations. Exit codes are reported, not judged.
pub trait CommandRunner {
    fn run(&self, invocation: &Invocation) -> impl Future<Output = Result<CommandOutput>> + Send;
}

/// Runner that spawns the real adb binary
#[derive(Debug, Clone)]
pub struct SystemRunner {
    binary: AdbBinary,
}

impl SystemRunner {
    pub fn new(binary: AdbBinary) -> Self {
        Self { binary }
    }
}

impl CommandRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation) -> Result<CommandOutput> {
        debug!(
            "{}: {} {:?}",
            invocation.description, self.binary, invocation.args
        );

        let mut cmd = Command::new(self.binary.path());
        cmd.args(&invocation.args);

        let spawn_error = |e: std::io::Error| {
            GadbError::command_failed(
                invocation.description.clone(),
                None,
                format!("Failed to execute {}: {}", self.binary, e),
            )
        };

        match invocation.stdio {
            Stdio::Inherit => {
                let status = cmd
                    .stdin(ProcessStdio::inherit())
                    .stdout(ProcessStdio::inherit())
                    .stderr(ProcessStdio::inherit())
                    .status()
                    .await
                    .map_err(spawn_error)?;

                Ok(CommandOutput {
                    exit_code: status.code(),
                    ..Default::default()
                })
            }
            Stdio::Capture => {
                let output = cmd
                    .stdin(ProcessStdio::null())
                    .output()
                    .await
                    .map_err(spawn_error)?;

                Ok(CommandOutput {
                    stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                    exit_code: output.status.code(),
                })
            }
        }
    }
}
