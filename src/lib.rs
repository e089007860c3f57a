// file: src/lib.rs
// version: 1.0.0
// guid: f2a6c9d4-0b57-4e31-8a2c-6d9e1f5b7c80

//! # gadb
//!
//! An extended adb. Runs device commands through `su`, moves privileged files
//! through a staging directory on the device, looks up package APK paths and
//! mirrors device directories locally. Every device operation is an `adb`
//! subprocess; gadb locates the binary and sequences the invocations.

pub mod adb;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use error::{GadbError, Result};

/// Version information for the utility
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
