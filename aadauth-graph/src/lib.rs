//! Graph API directory client
//!
//! Implements [`aadauth_rbac::DirectoryClient`] against the `memberOf`
//! endpoint of either the legacy AAD Graph API or Microsoft Graph, and
//! classifies HTTP failures so a 403 can degrade to the default role.

pub mod client;
pub mod config;
pub mod errors;
pub mod types;

// Re-export main types for convenience
pub use client::GraphDirectoryClient;
pub use config::GraphClientConfig;
pub use errors::GraphError;
pub use types::{GraphApiFlavor, MembershipFilter};
