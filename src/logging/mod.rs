// file: src/logging/mod.rs
// version: 1.0.0
// guid: e4b2d7a9-1f63-4c08-9e5a-7d3c8b0f2e61

//! Logging system for gadb

pub mod logger;

pub use logger::init_logger;
