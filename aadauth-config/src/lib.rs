//! Domain-driven configuration for the AAD group authority adapter
//!
//! Configuration is split by functional domain (authentication, service
//! endpoints, HTTP client, logging), with validation, defaults, and
//! environment variable overrides.

pub mod error;
pub mod loader;
pub mod validation;

// Domain-specific configuration modules
pub mod domains;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;

// Re-export domain configurations
pub use domains::{
    authentication::{AadAuthenticationConfig, UserGroupConfig},
    endpoints::{ServiceEndpoints, ServiceEndpointsConfig},
    http::HttpConfig,
    logging::{LogFormat, LogLevel, LoggingConfig},
    AadAuthConfig,
};

// Re-export utilities
pub use domains::utils::serde_duration;
