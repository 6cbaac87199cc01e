//! Role authorities derived from Azure AD group memberships
//!
//! This crate turns the groups a directory reports for a user into
//! `ROLE_`-prefixed authorities:
//! - Optional allow-list filtering of which groups become roles
//! - Required groups that always qualify when the directory reports them
//! - Degrade-to-`ROLE_USER` when the directory forbids the lookup
//!
//! The directory itself sits behind the [`DirectoryClient`] trait.

pub mod auth;
pub mod config;
pub mod directory;
pub mod error;
pub mod mapper;
pub mod models;

pub use auth::AuthenticatedPrincipal;
pub use config::AuthorityConfig;
pub use directory::DirectoryClient;
pub use error::{AuthorityError, AuthorityResult, DirectoryError, DirectoryResult};
pub use mapper::{convert_groups_to_authorities, GroupAuthorityMapper};
pub use models::{Authority, AuthoritySet, GroupRecord, DEFAULT_ROLE, ROLE_PREFIX};
