//! Graph API directory client implementation

use aadauth_config::AadAuthConfig;
use aadauth_rbac::{DirectoryClient, DirectoryResult, GroupRecord};
use reqwest::{header, Client};
use serde_json::{Map, Value as JsonValue};
use tracing::{debug, info, warn};

use crate::config::GraphClientConfig;
use crate::errors::GraphError;
use crate::types::{GraphApiFlavor, MembershipFilter, MembershipPage};

/// Directory client reading the signed-in user's `memberOf` listing
#[derive(Debug, Clone)]
pub struct GraphDirectoryClient {
    client: Client,
    membership_uri: url::Url,
    flavor: GraphApiFlavor,
    filter: MembershipFilter,
}

impl GraphDirectoryClient {
    /// Create a client with specific configuration
    pub fn new(config: GraphClientConfig) -> Result<Self, GraphError> {
        let membership_uri = url::Url::parse(&config.membership_uri)?;
        let flavor = config
            .flavor
            .unwrap_or_else(|| GraphApiFlavor::from_uri(&membership_uri));
        let filter = config.membership_filter(flavor);

        debug!(
            "Creating GraphDirectoryClient for {} ({:?}) with timeout: {}s",
            membership_uri,
            flavor,
            config.timeout.as_secs()
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()
            .map_err(|e| GraphError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            membership_uri,
            flavor,
            filter,
        })
    }

    /// Create a client from the loaded configuration
    pub fn from_config(config: &AadAuthConfig) -> Result<Self, GraphError> {
        Self::new(GraphClientConfig::from_config(config)?)
    }

    pub fn flavor(&self) -> GraphApiFlavor {
        self.flavor
    }

    pub fn membership_uri(&self) -> &url::Url {
        &self.membership_uri
    }

    /// Fetch and parse the group memberships for `access_token`
    pub async fn fetch_memberships(&self, access_token: &str) -> Result<Vec<GroupRecord>, GraphError> {
        info!("Fetching group memberships from: {}", self.membership_uri);

        let mut request = self
            .client
            .get(self.membership_uri.clone())
            .bearer_auth(access_token)
            .header(header::ACCEPT, self.flavor.accept_header());

        if let Some(api_version) = self.flavor.api_version() {
            request = request.header("api-version", api_version);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Membership response received: {}", status.as_u16());

        let body = response.text().await?;
        if !status.is_success() {
            return Err(GraphError::Status {
                status: status.as_u16(),
                body,
            });
        }

        self.parse_memberships(&body)
    }

    /// Parse a `memberOf` page into group records, keeping only group entries
    pub fn parse_memberships(&self, body: &str) -> Result<Vec<GroupRecord>, GraphError> {
        let page: MembershipPage = serde_json::from_str(body)?;

        if let Some(next_link) = &page.next_link {
            warn!(next_link = %next_link, "Membership listing has further pages; only the first page is used");
        }

        let total = page.value.len();
        let groups: Vec<GroupRecord> = page
            .value
            .iter()
            .filter(|entry| self.filter.matches(entry))
            .filter_map(|entry| self.to_group_record(entry))
            .collect();

        debug!(
            memberships = total,
            groups = groups.len(),
            "Parsed membership listing"
        );
        Ok(groups)
    }

    fn to_group_record(&self, entry: &Map<String, JsonValue>) -> Option<GroupRecord> {
        let id = entry
            .get(self.flavor.id_key())
            .or_else(|| entry.get("id"))
            .or_else(|| entry.get("objectId"))
            .and_then(JsonValue::as_str);
        let display_name = entry.get("displayName").and_then(JsonValue::as_str);

        match (id, display_name) {
            (Some(id), Some(name)) => {
                let mut record = GroupRecord::new(id, name);
                if let Some(kind) = entry.get(&self.filter.key).and_then(JsonValue::as_str) {
                    record = record.with_object_type(kind);
                }
                Some(record)
            }
            _ => {
                debug!("Skipping membership entry without id or displayName");
                None
            }
        }
    }
}

#[async_trait::async_trait]
impl DirectoryClient for GraphDirectoryClient {
    async fn lookup_groups(&self, access_token: &str) -> DirectoryResult<Vec<GroupRecord>> {
        self.fetch_memberships(access_token)
            .await
            .map_err(Into::into)
    }
}
