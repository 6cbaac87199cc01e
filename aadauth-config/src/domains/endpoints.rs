//! Directory service endpoints per cloud environment

use crate::error::{ConfigError, ConfigResult};
use crate::validation::{validate_url, Validatable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Endpoints of one cloud environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoints {
    pub aad_signin_uri: String,
    pub aad_graph_api_uri: String,
    pub aad_key_discovery_uri: String,
    /// Where a user's group memberships are listed
    pub aad_membership_rest_uri: String,
}

/// Per-environment endpoint overrides on top of the built-in presets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceEndpointsConfig {
    overrides: BTreeMap<String, ServiceEndpoints>,
}

impl ServiceEndpoints {
    fn new(signin: &str, graph: &str, keys: &str, membership: &str) -> Self {
        Self {
            aad_signin_uri: signin.to_string(),
            aad_graph_api_uri: graph.to_string(),
            aad_key_discovery_uri: keys.to_string(),
            aad_membership_rest_uri: membership.to_string(),
        }
    }

    /// Built-in endpoints for a known environment
    pub fn preset(environment: &str) -> Option<Self> {
        let endpoints = match environment {
            "global" => Self::new(
                "https://login.microsoftonline.com/",
                "https://graph.windows.net/",
                "https://login.microsoftonline.com/common/discovery/keys",
                "https://graph.windows.net/me/memberOf?api-version=1.6",
            ),
            "cn" => Self::new(
                "https://login.partner.microsoftonline.cn/",
                "https://graph.chinacloudapi.cn/",
                "https://login.partner.microsoftonline.cn/common/discovery/keys",
                "https://graph.chinacloudapi.cn/me/memberOf?api-version=1.6",
            ),
            "global-v2-graph" => Self::new(
                "https://login.microsoftonline.com/",
                "https://graph.microsoft.com/",
                "https://login.microsoftonline.com/common/discovery/v2.0/keys",
                "https://graph.microsoft.com/v1.0/me/memberOf",
            ),
            "cn-v2-graph" => Self::new(
                "https://login.partner.microsoftonline.cn/",
                "https://microsoftgraph.chinacloudapi.cn/",
                "https://login.partner.microsoftonline.cn/common/discovery/v2.0/keys",
                "https://microsoftgraph.chinacloudapi.cn/v1.0/me/memberOf",
            ),
            _ => return None,
        };
        Some(endpoints)
    }
}

impl ServiceEndpointsConfig {
    /// Endpoints for `environment`: an override if configured, else the preset
    pub fn get(&self, environment: &str) -> ConfigResult<ServiceEndpoints> {
        self.overrides
            .get(environment)
            .cloned()
            .or_else(|| ServiceEndpoints::preset(environment))
            .ok_or_else(|| ConfigError::UnknownEnvironment(environment.to_string()))
    }

    /// Replace the endpoints used for `environment`
    pub fn set(&mut self, environment: impl Into<String>, endpoints: ServiceEndpoints) {
        self.overrides.insert(environment.into(), endpoints);
    }
}

impl Validatable for ServiceEndpoints {
    fn validate(&self) -> ConfigResult<()> {
        validate_url(&self.aad_signin_uri, "aad_signin_uri", self.domain_name())?;
        validate_url(&self.aad_graph_api_uri, "aad_graph_api_uri", self.domain_name())?;
        validate_url(
            &self.aad_key_discovery_uri,
            "aad_key_discovery_uri",
            self.domain_name(),
        )?;
        validate_url(
            &self.aad_membership_rest_uri,
            "aad_membership_rest_uri",
            self.domain_name(),
        )?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "endpoints"
    }
}

impl Validatable for ServiceEndpointsConfig {
    fn validate(&self) -> ConfigResult<()> {
        for endpoints in self.overrides.values() {
            endpoints.validate()?;
        }
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "endpoints"
    }
}
