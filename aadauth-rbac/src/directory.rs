//! The directory service seam

use std::sync::Arc;

use crate::{error::DirectoryResult, models::GroupRecord};

/// Lists the groups a user belongs to
#[async_trait::async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Fetch the group memberships of the user owning `access_token`
    async fn lookup_groups(&self, access_token: &str) -> DirectoryResult<Vec<GroupRecord>>;
}

#[async_trait::async_trait]
impl<T: DirectoryClient + ?Sized> DirectoryClient for Arc<T> {
    async fn lookup_groups(&self, access_token: &str) -> DirectoryResult<Vec<GroupRecord>> {
        (**self).lookup_groups(access_token).await
    }
}
