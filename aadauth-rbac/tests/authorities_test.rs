mod common;

use std::sync::Arc;

use aadauth_config::ConfigLoader;
use aadauth_rbac::{
    AuthorityConfig, AuthorityError, DirectoryClient, DirectoryError, GroupAuthorityMapper,
    GroupRecord,
};
use common::FakeDirectoryClient;

fn required_test_group() -> AuthorityConfig {
    let mut config = AuthorityConfig::new();
    config.require_group("Test_Group");
    config
}

#[tokio::test]
async fn test_get_authorities_converts_directory_groups() {
    let client = FakeDirectoryClient::with_groups(vec![GroupRecord::new("testId", "Test_Group")]);
    let mapper = GroupAuthorityMapper::new(client, required_test_group());

    let authorities = mapper.get_authorities("graphApiToken").await.unwrap();

    assert_eq!(authorities.to_strings(), vec!["ROLE_Test_Group"]);
    assert_eq!(mapper.client().tokens(), vec!["graphApiToken".to_string()]);
}

#[tokio::test]
async fn test_get_authorities_applies_allow_list() {
    let client = FakeDirectoryClient::with_groups(vec![
        GroupRecord::new("testId", "Test_Group"),
        GroupRecord::new("testId", "Another_Group"),
        GroupRecord::new("otherId", "Unlisted_Group"),
    ]);
    let mut config = required_test_group();
    config.allow_group("Another_Group");
    let mapper = GroupAuthorityMapper::new(client, config);

    let authorities = mapper.get_authorities("graphApiToken").await.unwrap();

    assert_eq!(
        authorities.to_strings(),
        vec!["ROLE_Test_Group", "ROLE_Another_Group"]
    );
}

#[tokio::test]
async fn test_get_authorities_with_403_falls_back_to_user_role() {
    let client = FakeDirectoryClient::failing(DirectoryError::forbidden("Connection returned 403"));
    let mapper = GroupAuthorityMapper::new(client, required_test_group());

    let authorities = mapper
        .get_authorities("graphApiToken")
        .await
        .expect("a 403 from the directory must not be propagated");

    assert_eq!(authorities.len(), 1);
    assert!(authorities.contains("ROLE_USER"));
}

#[tokio::test]
async fn test_get_authorities_propagates_other_failures() {
    let failures = vec![
        DirectoryError::Network("connection reset".to_string()),
        DirectoryError::MalformedResponse("expected value".to_string()),
        DirectoryError::from_status(401, "token expired"),
        DirectoryError::from_status(500, "internal error"),
    ];

    for failure in failures {
        let mapper = GroupAuthorityMapper::new(
            FakeDirectoryClient::failing(failure.clone()),
            AuthorityConfig::new(),
        );

        match mapper.get_authorities("graphApiToken").await {
            Err(AuthorityError::Directory(err)) => assert_eq!(err, failure),
            Ok(authorities) => panic!("expected {:?}, got {:?}", failure, authorities),
        }
    }
}

#[tokio::test]
async fn test_get_authorities_with_no_groups_is_empty() {
    let mapper = GroupAuthorityMapper::new(
        FakeDirectoryClient::with_groups(Vec::new()),
        AuthorityConfig::new(),
    );

    let authorities = mapper.get_authorities("graphApiToken").await.unwrap();
    assert!(authorities.is_empty());
}

#[tokio::test]
async fn test_authenticate_builds_principal() {
    let mapper = GroupAuthorityMapper::new(
        FakeDirectoryClient::with_groups(vec![GroupRecord::new("id1", "Admins")]),
        AuthorityConfig::new(),
    );

    let principal = mapper.authenticate("user@contoso.com", "token").await.unwrap();
    assert_eq!(principal.subject, "user@contoso.com");
    assert!(principal.has_role("Admins"));

    let forbidden = GroupAuthorityMapper::new(
        FakeDirectoryClient::failing(DirectoryError::forbidden("denied")),
        AuthorityConfig::new(),
    );
    let principal = forbidden.authenticate("user@contoso.com", "token").await.unwrap();
    assert!(principal.has_only_default_role());
}

#[tokio::test]
async fn test_mapper_accepts_shared_trait_object() {
    let client: Arc<dyn DirectoryClient> = Arc::new(FakeDirectoryClient::with_groups(vec![
        GroupRecord::new("id1", "Test_Group"),
    ]));
    let mapper = GroupAuthorityMapper::new(client, AuthorityConfig::new());

    let authorities = mapper.get_authorities("token").await.unwrap();
    assert!(authorities.contains("ROLE_Test_Group"));
}

#[tokio::test]
async fn test_authority_config_from_loaded_configuration() {
    let yaml = r#"
authentication:
  active_directory_groups: [Test_Group]
  user_group:
    allowed_groups: [Another_Group]
"#;
    let config = ConfigLoader::with_prefix("AADRBAC_UNSET").from_yaml(yaml).unwrap();

    let mapper = GroupAuthorityMapper::new(
        FakeDirectoryClient::with_groups(vec![
            GroupRecord::new("id1", "Test_Group"),
            GroupRecord::new("id2", "Another_Group"),
            GroupRecord::new("id3", "Third_Group"),
        ]),
        AuthorityConfig::from(&config),
    );

    let authorities = mapper.get_authorities("token").await.unwrap();
    assert_eq!(
        authorities.to_strings(),
        vec!["ROLE_Test_Group", "ROLE_Another_Group"]
    );
}
