//! Graph client configuration

use aadauth_config::{AadAuthConfig, ConfigResult, HttpConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::types::{GraphApiFlavor, MembershipFilter};

/// Graph directory client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphClientConfig {
    /// Endpoint listing the signed-in user's memberships
    pub membership_uri: String,

    /// Request timeout
    pub timeout: Duration,

    /// User agent string
    pub user_agent: String,

    /// Whether to verify SSL certificates
    pub verify_ssl: bool,

    /// Force an API flavour instead of deriving it from `membership_uri`
    pub flavor: Option<GraphApiFlavor>,

    /// Membership property and value selecting groups
    pub group_key: Option<String>,
    pub group_value: Option<String>,
}

impl GraphClientConfig {
    /// Configuration for `membership_uri` with default HTTP settings
    pub fn new(membership_uri: impl Into<String>) -> Self {
        let http = HttpConfig::default();
        Self {
            membership_uri: membership_uri.into(),
            timeout: http.timeout,
            user_agent: http.user_agent,
            verify_ssl: http.verify_ssl,
            flavor: None,
            group_key: None,
            group_value: None,
        }
    }

    /// Build from the loaded configuration, resolving the environment's endpoints
    pub fn from_config(config: &AadAuthConfig) -> ConfigResult<Self> {
        let endpoints = config.service_endpoints()?;
        let user_group = &config.authentication.user_group;
        Ok(Self {
            membership_uri: endpoints.aad_membership_rest_uri,
            timeout: config.http.timeout,
            user_agent: config.http.user_agent.clone(),
            verify_ssl: config.http.verify_ssl,
            flavor: None,
            group_key: user_group.key.clone(),
            group_value: user_group.value.clone(),
        })
    }

    pub fn with_flavor(mut self, flavor: GraphApiFlavor) -> Self {
        self.flavor = Some(flavor);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configured filter, or the flavour's default when unset
    pub fn membership_filter(&self, flavor: GraphApiFlavor) -> MembershipFilter {
        match (&self.group_key, &self.group_value) {
            (Some(key), Some(value)) => MembershipFilter::new(key.clone(), value.clone()),
            _ => flavor.default_filter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_uses_environment_endpoints() {
        let mut config = AadAuthConfig::default();
        config.authentication.environment = "global-v2-graph".to_string();
        config.http.timeout = Duration::from_secs(7);

        let graph = GraphClientConfig::from_config(&config).unwrap();
        assert_eq!(
            graph.membership_uri,
            "https://graph.microsoft.com/v1.0/me/memberOf"
        );
        assert_eq!(graph.timeout, Duration::from_secs(7));
        assert_eq!(
            graph.membership_filter(GraphApiFlavor::MicrosoftGraph),
            MembershipFilter::new("@odata.type", "#microsoft.graph.group")
        );
    }

    #[test]
    fn test_from_config_unknown_environment() {
        let mut config = AadAuthConfig::default();
        config.authentication.environment = "mars".to_string();
        assert!(GraphClientConfig::from_config(&config).is_err());
    }

    #[test]
    fn test_configured_filter_wins() {
        let mut config = GraphClientConfig::new("https://graph.windows.net/me/memberOf");
        config.group_key = Some("objectType".to_string());
        config.group_value = Some("Role".to_string());
        assert_eq!(
            config.membership_filter(GraphApiFlavor::AadGraph),
            MembershipFilter::new("objectType", "Role")
        );
    }
}
