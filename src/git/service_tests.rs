//! Tests for `GitService`.

use std::sync::Arc;

use crate::client::{Client, ClientConfig, ClientError};
use crate::models::{GitRefListOptions, GitStatus, GitStatusContext, GitStatusState};
use crate::transport::test_fixtures::MockClient;

fn client_with(mock: &Arc<MockClient>) -> Client<Arc<MockClient>> {
    let config = ClientConfig::new("contoso", "Fabrikam Web", "pat").unwrap();
    Client::with_transport(config, Arc::clone(mock))
}

mod list_refs {
    use super::*;

    const REFS: &str = r#"{"value":[{"name":"refs/heads/main","objectId":"abc"}],"count":1}"#;

    #[tokio::test]
    async fn decodes_ref_list() {
        let mock = MockClient::replying(200, REFS);
        let client = client_with(&mock);

        let refs = client.git().list_refs("web", "heads", None).await.unwrap();

        assert_eq!(refs.count, 1);
        assert_eq!(refs.refs[0].object_id.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn targets_refs_endpoint_under_project() {
        let mock = MockClient::replying(200, REFS);
        let client = client_with(&mock);

        client.git().list_refs("web", "heads", None).await.unwrap();

        let request = mock.last_request();
        assert_eq!(request.method, http::Method::GET);
        assert_eq!(
            request.url.as_str(),
            "https://dev.azure.com/contoso/Fabrikam%20Web/_apis/git/repositories/web/refs/heads?api-version=5.1-preview.1"
        );
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn encodes_only_set_options() {
        let mock = MockClient::replying(200, REFS);
        let client = client_with(&mock);
        let options = GitRefListOptions {
            filter: "feature/".to_string(),
            include_statuses: true,
            latest_statuses_only: false,
        };

        client
            .git()
            .list_refs("web", "heads", Some(&options))
            .await
            .unwrap();

        let url = mock.last_request().url;
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("filter".to_string(), "feature/".to_string()),
                ("includeStatuses".to_string(), "true".to_string()),
                ("api-version".to_string(), "5.1-preview.1".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn escapes_repository_name() {
        let mock = MockClient::replying(200, REFS);
        let client = client_with(&mock);

        client
            .git()
            .list_refs("team/app repo", "heads", None)
            .await
            .unwrap();

        let url = mock.last_request().url;
        assert!(
            url.path()
                .ends_with("/_apis/git/repositories/team%2Fapp%20repo/refs/heads"),
            "unexpected path: {}",
            url.path()
        );
    }
}

mod get_repository {
    use super::*;

    #[tokio::test]
    async fn returns_repository() {
        let mock = MockClient::replying(
            200,
            r#"{"id":"278d5cd2","name":"web","defaultBranch":"refs/heads/main"}"#,
        );
        let client = client_with(&mock);

        let repo = client.git().get_repository("web").await.unwrap();

        assert_eq!(repo.default_branch.as_deref(), Some("refs/heads/main"));
        assert!(
            mock.last_request()
                .url
                .path()
                .ends_with("/_apis/git/repositories/web")
        );
    }

    #[tokio::test]
    async fn not_found_is_unexpected_status() {
        let mock = MockClient::replying(404, r#"{"message":"not found"}"#);
        let client = client_with(&mock);

        let err = client.git().get_repository("missing").await.unwrap_err();

        assert!(matches!(
            err,
            ClientError::UnexpectedStatus { status, .. } if status == http::StatusCode::NOT_FOUND
        ));
    }

    #[tokio::test]
    async fn dot_and_empty_names_are_rejected_without_sending() {
        let mock = MockClient::replying(200, "{}");
        let client = client_with(&mock);

        for name in ["", ".", ".."] {
            let err = client.git().get_repository(name).await.unwrap_err();

            assert!(
                matches!(&err, ClientError::InvalidSegment(value) if value == name),
                "{name:?} gave {err:?}"
            );
        }
        assert!(mock.captured_requests().is_empty());
    }

    #[tokio::test]
    async fn dots_inside_a_name_are_kept() {
        let mock = MockClient::replying(200, r#"{"name":"web.v2"}"#);
        let client = client_with(&mock);

        client.git().get_repository("web.v2").await.unwrap();

        assert!(
            mock.last_request()
                .url
                .path()
                .ends_with("/_apis/git/repositories/web.v2")
        );
    }
}

mod create_status {
    use super::*;

    fn pending_status() -> GitStatus {
        GitStatus {
            state: Some(GitStatusState::Pending),
            description: Some("Build queued".to_string()),
            context: Some(GitStatusContext {
                genre: Some("ci".to_string()),
                name: Some("build".to_string()),
            }),
            ..GitStatus::default()
        }
    }

    #[tokio::test]
    async fn posts_status_body_to_commit() {
        let mock = MockClient::replying(200, r#"{"id":7,"state":"pending"}"#);
        let client = client_with(&mock);

        let created = client
            .git()
            .create_status("web", "bbb111", &pending_status())
            .await
            .unwrap();

        assert_eq!(created.id, Some(7));
        let request = mock.last_request();
        assert_eq!(request.method, http::Method::POST);
        assert!(
            request
                .url
                .path()
                .ends_with("/_apis/git/repositories/web/commits/bbb111/statuses")
        );
        assert_eq!(
            request.header_str(&http::header::CONTENT_TYPE),
            Some("application/json")
        );
        let body: serde_json::Value = serde_json::from_slice(&request.body.unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "context": {"genre": "ci", "name": "build"},
                "description": "Build queued",
                "state": "pending"
            })
        );
    }

    #[tokio::test]
    async fn sends_basic_auth() {
        let mock = MockClient::replying(200, "{}");
        let client = client_with(&mock);

        client
            .git()
            .create_status("web", "bbb111", &pending_status())
            .await
            .unwrap();

        assert_eq!(
            mock.last_request()
                .header_str(&http::header::AUTHORIZATION),
            Some("Basic OnBhdA==")
        );
    }
}
