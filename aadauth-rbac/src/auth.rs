//! Authenticated principal carrying its granted authorities

use serde::{Deserialize, Serialize};

use crate::models::{Authority, AuthoritySet, DEFAULT_ROLE};

/// A user together with the authorities resolved for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedPrincipal {
    /// Subject identifier (user object id, UPN, ...)
    pub subject: String,

    /// Authorities granted to the subject
    pub authorities: AuthoritySet,
}

impl AuthenticatedPrincipal {
    pub fn new(subject: impl Into<String>, authorities: AuthoritySet) -> Self {
        Self {
            subject: subject.into(),
            authorities,
        }
    }

    /// Check for an exact authority string, e.g. `ROLE_Admins`
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.contains(authority)
    }

    /// Check for a role by name, without the `ROLE_` prefix
    pub fn has_role(&self, role: &str) -> bool {
        self.authorities.contains(Authority::for_role(role).as_str())
    }

    /// True when the principal holds nothing but the baseline role
    pub fn has_only_default_role(&self) -> bool {
        self.authorities.len() == 1 && self.has_role(DEFAULT_ROLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_checks() {
        let authorities: AuthoritySet = vec![Authority::for_role("Test_Group")].into();
        let principal = AuthenticatedPrincipal::new("user@contoso.com", authorities);

        assert!(principal.has_role("Test_Group"));
        assert!(principal.has_authority("ROLE_Test_Group"));
        assert!(!principal.has_authority("Test_Group"));
        assert!(!principal.has_only_default_role());
    }

    #[test]
    fn test_default_role_only() {
        let principal = AuthenticatedPrincipal::new(
            "user@contoso.com",
            AuthoritySet::singleton(Authority::default_user()),
        );
        assert!(principal.has_only_default_role());
        assert!(principal.has_authority("ROLE_USER"));
    }
}
