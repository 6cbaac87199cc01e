//! Azure AD authentication properties

use crate::error::ConfigResult;
use crate::validation::{validate_names, validate_required_string, Validatable};
use serde::{Deserialize, Serialize};

/// Authentication properties controlling how directory groups become roles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AadAuthenticationConfig {
    /// Cloud environment used to pick the service endpoints
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Groups that always qualify for a role when the directory reports them
    #[serde(default)]
    pub active_directory_groups: Vec<String>,

    /// Membership filtering
    #[serde(default)]
    pub user_group: UserGroupConfig,
}

/// Which directory memberships count as groups, and which of them are allowed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGroupConfig {
    /// Display names of groups allowed to become roles; empty allows all
    #[serde(default)]
    pub allowed_groups: Vec<String>,

    /// Membership property identifying the object kind.
    /// Defaults depend on the Graph API flavour in use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Value of `key` that marks a membership as a group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Default for AadAuthenticationConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            active_directory_groups: Vec::new(),
            user_group: UserGroupConfig::default(),
        }
    }
}

impl Validatable for AadAuthenticationConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(&self.environment, "environment", self.domain_name())?;
        validate_names(
            &self.active_directory_groups,
            "active_directory_groups",
            self.domain_name(),
        )?;
        self.user_group.validate()?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "authentication"
    }
}

impl Validatable for UserGroupConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_names(&self.allowed_groups, "allowed_groups", self.domain_name())?;

        // key and value only make sense together
        match (&self.key, &self.value) {
            (Some(key), Some(value)) => {
                validate_required_string(key, "key", self.domain_name())?;
                validate_required_string(value, "value", self.domain_name())?;
                Ok(())
            }
            (None, None) => Ok(()),
            _ => Err(self.validation_error("key and value must be set together")),
        }
    }

    fn domain_name(&self) -> &'static str {
        "authentication.user_group"
    }
}

fn default_environment() -> String {
    "global".to_string()
}
