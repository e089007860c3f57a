// file: src/adb/mod.rs
// version: 1.0.0
// guid: 2b8f0e64-d13a-4c97-a5e2-9c6d4f8b1a30

//! adb integration: locating the binary, building invocations and running them

pub mod client;
pub mod locator;
pub mod paths;
pub mod runner;

pub use client::Adb;
pub use locator::{resolve, AdbBinary, ADB_PATH_ENV};
pub use runner::{CommandOutput, CommandRunner, Invocation, Stdio, SystemRunner};

/// adb client backed by the real binary
pub type SystemAdb = Adb<SystemRunner>;

impl SystemAdb {
    /// Client spawning the given binary
    pub fn with_binary(binary: AdbBinary) -> Self {
        Adb::new(SystemRunner::new(binary))
    }
}
