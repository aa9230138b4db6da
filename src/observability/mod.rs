//! Logging setup built on `tracing-subscriber`.
//!
//! The crate logs through `tracing` macros everywhere; this module installs a
//! subscriber for hosts that do not bring their own.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → rotating file | stderr
//! ```
//!
//! # Features
//!
//! - **Level Filtering**: `trace_level` config option, default `"info"`
//! - **File Output**: `log_file` config option; rotates at 10MB with 3 backups
//! - **Stderr Fallback**: used when no log file is configured
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::{RotatingFileHandle, RotatingFileWriter};
pub use init::init_tracing;
