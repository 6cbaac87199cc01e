//! Which directory groups qualify for an authority

use aadauth_config::{AadAuthConfig, AadAuthenticationConfig};
use std::collections::HashSet;

/// Allow-list configuration for authority mapping.
///
/// The effective allow-list is the union of the allowed and required groups.
/// When both are empty every group qualifies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorityConfig {
    allowed_groups: HashSet<String>,
    required_groups: HashSet<String>,
}

impl AuthorityConfig {
    /// Configuration that converts every group
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration restricted to the given group display names
    pub fn with_allowed_groups<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_groups: groups.into_iter().map(Into::into).collect(),
            required_groups: HashSet::new(),
        }
    }

    /// Add a group to the allow-list
    pub fn allow_group(&mut self, display_name: impl Into<String>) -> &mut Self {
        self.allowed_groups.insert(display_name.into());
        self
    }

    /// Add a group that always qualifies when the directory reports it
    pub fn require_group(&mut self, display_name: impl Into<String>) -> &mut Self {
        self.required_groups.insert(display_name.into());
        self
    }

    pub fn allowed_groups(&self) -> &HashSet<String> {
        &self.allowed_groups
    }

    pub fn required_groups(&self) -> &HashSet<String> {
        &self.required_groups
    }

    /// True when no allow-list is in effect
    pub fn is_unfiltered(&self) -> bool {
        self.allowed_groups.is_empty() && self.required_groups.is_empty()
    }

    /// Whether a group with this display name becomes an authority
    pub fn permits(&self, display_name: &str) -> bool {
        self.is_unfiltered()
            || self.allowed_groups.contains(display_name)
            || self.required_groups.contains(display_name)
    }
}

impl From<&AadAuthenticationConfig> for AuthorityConfig {
    fn from(config: &AadAuthenticationConfig) -> Self {
        Self {
            allowed_groups: config.user_group.allowed_groups.iter().cloned().collect(),
            required_groups: config.active_directory_groups.iter().cloned().collect(),
        }
    }
}

impl From<&AadAuthConfig> for AuthorityConfig {
    fn from(config: &AadAuthConfig) -> Self {
        Self::from(&config.authentication)
    }
}
