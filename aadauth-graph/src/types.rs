//! Graph API flavours and membership wire types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Which Graph API serves the membership endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphApiFlavor {
    /// Legacy Azure AD Graph (`graph.windows.net`, `graph.chinacloudapi.cn`)
    AadGraph,
    /// Microsoft Graph (`graph.microsoft.com`, `microsoftgraph.chinacloudapi.cn`)
    MicrosoftGraph,
}

const MICROSOFT_GRAPH_HOSTS: &[&str] = &["graph.microsoft.com", "microsoftgraph.chinacloudapi.cn"];

impl GraphApiFlavor {
    /// Derive the flavour from the membership URI's host
    pub fn from_uri(uri: &url::Url) -> Self {
        match uri.host_str() {
            Some(host) if MICROSOFT_GRAPH_HOSTS.contains(&host) => GraphApiFlavor::MicrosoftGraph,
            _ => GraphApiFlavor::AadGraph,
        }
    }

    pub fn accept_header(&self) -> &'static str {
        match self {
            GraphApiFlavor::AadGraph => "application/json;odata=minimalmetadata",
            GraphApiFlavor::MicrosoftGraph => "application/json",
        }
    }

    /// Extra `api-version` header value, AAD Graph only
    pub fn api_version(&self) -> Option<&'static str> {
        match self {
            GraphApiFlavor::AadGraph => Some("1.6"),
            GraphApiFlavor::MicrosoftGraph => None,
        }
    }

    /// Property holding the object identifier
    pub fn id_key(&self) -> &'static str {
        match self {
            GraphApiFlavor::AadGraph => "objectId",
            GraphApiFlavor::MicrosoftGraph => "id",
        }
    }

    /// Filter selecting group memberships when none is configured
    pub fn default_filter(&self) -> MembershipFilter {
        match self {
            GraphApiFlavor::AadGraph => MembershipFilter::new("objectType", "Group"),
            GraphApiFlavor::MicrosoftGraph => {
                MembershipFilter::new("@odata.type", "#microsoft.graph.group")
            }
        }
    }
}

/// Selects memberships whose `key` property equals `value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipFilter {
    pub key: String,
    pub value: String,
}

impl MembershipFilter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn matches(&self, entry: &Map<String, JsonValue>) -> bool {
        entry.get(&self.key).and_then(JsonValue::as_str) == Some(self.value.as_str())
    }
}

/// One page of a `memberOf` listing
#[derive(Debug, Clone, Deserialize)]
pub struct MembershipPage {
    #[serde(default)]
    pub value: Vec<Map<String, JsonValue>>,

    /// Continuation link; only the first page is read
    #[serde(rename = "@odata.nextLink", alias = "odata.nextLink", default)]
    pub next_link: Option<String>,
}
