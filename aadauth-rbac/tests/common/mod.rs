//! Test doubles for the directory seam

use std::sync::Mutex;

use aadauth_rbac::{DirectoryClient, DirectoryError, DirectoryResult, GroupRecord};

/// Directory client returning a canned result and recording the tokens it saw
pub struct FakeDirectoryClient {
    response: DirectoryResult<Vec<GroupRecord>>,
    tokens: Mutex<Vec<String>>,
}

impl FakeDirectoryClient {
    pub fn with_groups(groups: Vec<GroupRecord>) -> Self {
        Self {
            response: Ok(groups),
            tokens: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: DirectoryError) -> Self {
        Self {
            response: Err(error),
            tokens: Mutex::new(Vec::new()),
        }
    }

    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DirectoryClient for FakeDirectoryClient {
    async fn lookup_groups(&self, access_token: &str) -> DirectoryResult<Vec<GroupRecord>> {
        self.tokens.lock().unwrap().push(access_token.to_string());
        self.response.clone()
    }
}
