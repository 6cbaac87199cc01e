//! Domain-specific configuration modules

pub mod authentication;
pub mod endpoints;
pub mod http;
pub mod logging;
pub mod utils;

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Main configuration combining all domains
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AadAuthConfig {
    /// Authentication and group filtering
    #[serde(default)]
    pub authentication: authentication::AadAuthenticationConfig,

    /// Endpoint overrides per environment
    #[serde(default)]
    pub endpoints: endpoints::ServiceEndpointsConfig,

    /// HTTP client configuration
    #[serde(default)]
    pub http: http::HttpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: logging::LoggingConfig,
}

impl AadAuthConfig {
    /// Validate all domain configurations
    pub fn validate_all(&self) -> ConfigResult<()> {
        self.authentication.validate()?;
        self.endpoints.validate()?;
        self.http.validate()?;
        self.logging.validate()?;

        // The configured environment must resolve to endpoints
        self.service_endpoints()?;

        Ok(())
    }

    /// Endpoints of the configured environment
    pub fn service_endpoints(&self) -> ConfigResult<endpoints::ServiceEndpoints> {
        self.endpoints.get(&self.authentication.environment)
    }

    /// Generate a sample configuration file
    pub fn generate_sample() -> String {
        let config = AadAuthConfig::default();
        serde_yaml::to_string(&config)
            .unwrap_or_else(|_| "# Failed to generate sample config".to_string())
    }
}
