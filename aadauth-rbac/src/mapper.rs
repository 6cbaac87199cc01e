//! Group-to-authority mapping

use tracing::{debug, info, warn};

use crate::{
    auth::AuthenticatedPrincipal,
    config::AuthorityConfig,
    directory::DirectoryClient,
    error::AuthorityResult,
    models::{Authority, AuthoritySet, GroupRecord},
};

/// Convert directory groups into `ROLE_` authorities.
///
/// Groups outside the effective allow-list are dropped. Duplicates
/// collapse; order follows the first occurrence in `groups`.
pub fn convert_groups_to_authorities(
    groups: &[GroupRecord],
    config: &AuthorityConfig,
) -> AuthoritySet {
    let mut authorities = AuthoritySet::new();

    for group in groups {
        let name = group.display_name();
        if !config.permits(name) {
            debug!(group = name, "Group not in allow-list, no authority granted");
            continue;
        }
        authorities.insert(Authority::from_group(group));
    }

    authorities
}

/// Resolves a user's authorities through a directory client
pub struct GroupAuthorityMapper<C> {
    client: C,
    config: AuthorityConfig,
}

impl<C: DirectoryClient> GroupAuthorityMapper<C> {
    /// Create a new mapper
    pub fn new(client: C, config: AuthorityConfig) -> Self {
        Self { client, config }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn config(&self) -> &AuthorityConfig {
        &self.config
    }

    /// Convert groups using this mapper's configuration
    pub fn convert_groups_to_authorities(&self, groups: &[GroupRecord]) -> AuthoritySet {
        convert_groups_to_authorities(groups, &self.config)
    }

    /// Look up the user's groups and convert them to authorities.
    ///
    /// A forbidden lookup yields `{ROLE_USER}` instead of an error; every
    /// other lookup failure is returned to the caller.
    pub async fn get_authorities(&self, access_token: &str) -> AuthorityResult<AuthoritySet> {
        debug!("Looking up directory groups");

        let groups = match self.client.lookup_groups(access_token).await {
            Ok(groups) => groups,
            Err(err) if err.is_forbidden() => {
                warn!(error = %err, "Directory denied group lookup, granting default authority");
                return Ok(AuthoritySet::singleton(Authority::default_user()));
            }
            Err(err) => return Err(err.into()),
        };

        let authorities = self.convert_groups_to_authorities(&groups);
        info!(
            groups = groups.len(),
            authorities = authorities.len(),
            "Resolved authorities from directory groups"
        );
        Ok(authorities)
    }

    /// Resolve authorities and attach them to a principal for `subject`
    pub async fn authenticate(
        &self,
        subject: impl Into<String>,
        access_token: &str,
    ) -> AuthorityResult<AuthenticatedPrincipal> {
        let authorities = self.get_authorities(access_token).await?;
        Ok(AuthenticatedPrincipal::new(subject, authorities))
    }
}
