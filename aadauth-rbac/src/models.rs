//! Data models for group records and authorities

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Prefix carried by every role authority
pub const ROLE_PREFIX: &str = "ROLE_";

/// Role granted when the directory refuses to list memberships
pub const DEFAULT_ROLE: &str = "USER";

/// A group membership reported by the directory
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupRecord {
    id: String,
    display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    object_type: Option<String>,
}

impl GroupRecord {
    /// Create a new group record
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            object_type: None,
        }
    }

    /// Record the directory object type the group was parsed from
    pub fn with_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = Some(object_type.into());
        self
    }

    /// Opaque directory identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable group name, used for role derivation
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn object_type(&self) -> Option<&str> {
        self.object_type.as_deref()
    }
}

/// A role authority such as `ROLE_Test_Group`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Authority(String);

impl Authority {
    /// Authority for a role name, adding the `ROLE_` prefix
    pub fn for_role(name: &str) -> Self {
        Self(format!("{}{}", ROLE_PREFIX, name))
    }

    /// Authority derived from a group's display name
    pub fn from_group(group: &GroupRecord) -> Self {
        Self::for_role(group.display_name())
    }

    /// The baseline `ROLE_USER` authority
    pub fn default_user() -> Self {
        Self::for_role(DEFAULT_ROLE)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Role name without the prefix
    pub fn role_name(&self) -> &str {
        self.0.strip_prefix(ROLE_PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Authority {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Set of authorities that remembers first-insertion order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Authority>", into = "Vec<Authority>")]
pub struct AuthoritySet {
    ordered: Vec<Authority>,
    seen: HashSet<Authority>,
}

impl AuthoritySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set holding exactly one authority
    pub fn singleton(authority: Authority) -> Self {
        let mut set = Self::new();
        set.insert(authority);
        set
    }

    /// Add an authority; returns false if it was already present
    pub fn insert(&mut self, authority: Authority) -> bool {
        if !self.seen.insert(authority.clone()) {
            return false;
        }
        self.ordered.push(authority);
        true
    }

    pub fn contains(&self, authority: &str) -> bool {
        self.ordered.iter().any(|a| a.as_str() == authority)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Authorities in first-insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Authority> {
        self.ordered.iter()
    }

    /// Authority strings in first-insertion order
    pub fn to_strings(&self) -> Vec<String> {
        self.ordered.iter().map(|a| a.as_str().to_string()).collect()
    }
}

// Set semantics: order does not take part in equality
impl PartialEq for AuthoritySet {
    fn eq(&self, other: &Self) -> bool {
        self.seen == other.seen
    }
}

impl Eq for AuthoritySet {}

impl FromIterator<Authority> for AuthoritySet {
    fn from_iter<I: IntoIterator<Item = Authority>>(iter: I) -> Self {
        let mut set = Self::new();
        for authority in iter {
            set.insert(authority);
        }
        set
    }
}

impl From<Vec<Authority>> for AuthoritySet {
    fn from(authorities: Vec<Authority>) -> Self {
        authorities.into_iter().collect()
    }
}

impl From<AuthoritySet> for Vec<Authority> {
    fn from(set: AuthoritySet) -> Self {
        set.ordered
    }
}

impl IntoIterator for AuthoritySet {
    type Item = Authority;
    type IntoIter = std::vec::IntoIter<Authority>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.into_iter()
    }
}

impl<'a> IntoIterator for &'a AuthoritySet {
    type Item = &'a Authority;
    type IntoIter = std::slice::Iter<'a, Authority>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.iter()
    }
}
