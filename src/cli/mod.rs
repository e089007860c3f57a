// file: src/cli/mod.rs
// version: 1.0.0
// guid: d05c8a2f-7e19-4b63-8c4d-a1f9e6b3027c

//! Command line interface for gadb

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
