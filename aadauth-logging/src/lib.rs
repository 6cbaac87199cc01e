//! Structured logging setup for the AAD group authority adapter
//!
//! Authority mapping emits `tracing` events; this crate installs a
//! subscriber for them, driven by the `logging` configuration domain.

pub mod init;

pub use aadauth_config::{LogFormat, LogLevel, LoggingConfig};
pub use init::{build_env_filter, init_logging_from_config, init_simple_tracing};
