#[path = "../common/mod.rs"]
mod common;

use assert_json_diff::assert_json_eq;
use common::*;
use mattermost_client::prelude::*;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn every_call_carries_the_login_token() {
    let (client, transport) = connect(|req| match relative_path(&req.url) {
        "channels" => ok(json!([])),
        "hooks/incoming" => ok(json!([])),
        _ => ok(json!({})),
    })
    .await;

    client.get_channels(false).await.unwrap();
    client.get_wbs(false).await.unwrap();

    let sent = transport.sent();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0].header("Authorization"), None);
    for request in &sent[1..] {
        assert_eq!(request.header("Authorization"), Some("Bearer abc123"));
    }
}

#[tokio::test]
async fn every_call_uses_the_configured_timeout() {
    let config = test_config().timeout_secs(7);
    let (client, transport) = connect_with(config, |_| ok(json!([]))).await;

    client.get_channels(false).await.unwrap();

    for request in transport.sent() {
        assert_eq!(request.timeout, Some(std::time::Duration::from_secs(7)));
    }
}

#[tokio::test]
async fn session_accessors_reflect_the_login() {
    let (client, _) = connect(|_| ok(json!([]))).await;
    assert_eq!(client.server_url(), SERVER_URL);
    assert_eq!(client.login_user_id(), LOGIN_USER_ID);
    assert_eq!(client.login_user_name(), "bob");
    assert_eq!(client.session().token, TOKEN);
}

#[tokio::test]
async fn get_a_webhook_skips_soft_deleted_hooks() {
    let (client, _) = connect(|req| {
        ok(match page_of(req) {
            Some(0) => json!([
                {"id": "1", "channel_id": "c1", "delete_at": 5},
                {"id": "2", "channel_id": "c2", "delete_at": 0}
            ]),
            _ => json!([]),
        })
    })
    .await;

    assert_eq!(client.get_a_webhook().await.unwrap(), Some("2".to_string()));
}

#[tokio::test]
async fn get_a_webhook_returns_none_when_all_are_deleted() {
    let (client, transport) = connect(|req| {
        ok(match page_of(req) {
            Some(0) => json!([
                {"id": "1", "channel_id": "c1", "delete_at": 5},
                {"id": "2", "channel_id": "c2", "delete_at": 9}
            ]),
            _ => json!([{"id": "3", "channel_id": "c3", "delete_at": 0}]),
        })
    })
    .await;

    assert_eq!(client.get_a_webhook().await.unwrap(), None);
    // first page only
    assert_eq!(transport.sent_to("GET", "hooks/incoming").len(), 1);
}

#[tokio::test]
async fn bind_webhook_creates_one_when_channel_has_none() {
    let (client, transport) = connect(|req| match (req.method.as_str(), relative_path(&req.url)) {
        ("GET", "hooks/incoming") => ok(match page_of(req) {
            Some(0) => json!([{"id": "h9", "channel_id": "other", "delete_at": 0}]),
            _ => json!([]),
        }),
        ("POST", "hooks/incoming") => ok(json!({
            "id": "new-hook",
            "channel_id": "c1",
            "display_name": "General",
            "delete_at": 0
        })),
        _ => status(StatusCode::NOT_FOUND, json!({})),
    })
    .await;

    let id = client.channel_bind_webhook("c1", "General").await.unwrap();
    assert_eq!(id, "new-hook");

    let creates = transport.sent_to("POST", "hooks/incoming");
    assert_eq!(creates.len(), 1);
    assert_json_eq!(
        creates[0].body.clone().unwrap(),
        json!({"channel_id": "c1", "user_id": LOGIN_USER_ID, "display_name": "General"})
    );
}

#[tokio::test]
async fn bind_webhook_reuses_the_first_existing_hook() {
    let (client, transport) = connect(|req| match req.method.as_str() {
        "GET" => ok(match page_of(req) {
            Some(0) => json!([
                {"id": "h1", "channel_id": "c0"},
                {"id": "h2", "channel_id": "c1"},
                {"id": "h3", "channel_id": "c1"}
            ]),
            _ => json!([]),
        }),
        _ => ok(json!({"id": "should-not-be-created", "channel_id": "c1"})),
    })
    .await;

    let id = client.channel_bind_webhook("c1", "General").await.unwrap();
    assert_eq!(id, "h2");
    assert!(transport.sent_to("POST", "hooks/incoming").is_empty());
}

#[tokio::test]
async fn bind_webhook_only_scans_the_first_page_by_default() {
    let handler = |req: &HttpRequest| match req.method.as_str() {
        "GET" => ok(match page_of(req) {
            Some(0) => json!([{"id": "h1", "channel_id": "c0"}]),
            Some(1) => json!([{"id": "h2", "channel_id": "c1"}]),
            _ => json!([]),
        }),
        _ => ok(json!({"id": "created", "channel_id": "c1"})),
    };

    let (client, transport) = connect(handler).await;
    assert_eq!(client.channel_bind_webhook("c1", "General").await.unwrap(), "created");
    assert_eq!(transport.sent_to("POST", "hooks/incoming").len(), 1);

    let (client, transport) = connect_with(test_config().bind_scan_all(true), handler).await;
    assert_eq!(client.channel_bind_webhook("c1", "General").await.unwrap(), "h2");
    assert!(transport.sent_to("POST", "hooks/incoming").is_empty());
}

#[tokio::test]
async fn get_user_by_email_returns_the_user() {
    let (client, transport) = connect(|req| match relative_path(&req.url) {
        "users/email/alice@example.com" => ok(json!({
            "id": "u2",
            "username": "alice",
            "email": "alice@example.com",
            "locale": "en"
        })),
        _ => status(StatusCode::NOT_FOUND, json!({})),
    })
    .await;

    let user = client.get_user_by_email("alice@example.com").await.unwrap();
    assert_eq!(user.id, "u2");
    assert_eq!(user.username, "alice");
    assert_eq!(user.extra.get("locale"), Some(&json!("en")));
    assert_eq!(transport.sent_to("GET", "users/email/alice@example.com").len(), 1);
}

#[tokio::test]
async fn get_user_by_email_rejects_malformed_addresses_without_a_request() {
    let (client, transport) = connect(|_| ok(json!({}))).await;

    let err = client.get_user_by_email("not-an-email").await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(transport.sent().len(), 1); // login only
}

#[tokio::test]
async fn create_private_channel_posts_the_ordered_pair() {
    let (client, transport) = connect(|req| match (req.method.as_str(), relative_path(&req.url)) {
        ("GET", "users/email/alice@example.com") => ok(json!({"id": "u2", "username": "alice"})),
        ("POST", "channels/direct") => ok(json!({
            "id": "dm1",
            "type": "D",
            "name": "u1__u2",
            "team_id": "",
            "total_msg_count": 0
        })),
        _ => status(StatusCode::NOT_FOUND, json!({})),
    })
    .await;

    let channel = client
        .create_private_channel("alice@example.com")
        .await
        .unwrap();
    assert_eq!(channel.id, "dm1");
    assert!(channel.is_direct());
    assert_eq!(channel.extra.get("total_msg_count"), Some(&json!(0)));

    let posts = transport.sent_to("POST", "channels/direct");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].body, Some(json!(["u1", "u2"])));
}

#[tokio::test]
async fn create_private_channel_fails_fast_for_unknown_email() {
    let (client, transport) = connect(|req| match relative_path(&req.url) {
        "users/email/ghost@example.com" => status(
            StatusCode::NOT_FOUND,
            json!({"id": "app.user.missing_account.const", "status_code": 404}),
        ),
        _ => ok(json!({"id": "dm1"})),
    })
    .await;

    let err = client
        .create_private_channel("ghost@example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(transport.sent_to("POST", "channels/direct").is_empty());
}

#[tokio::test]
async fn create_private_channel_fails_fast_for_user_without_id() {
    let (client, transport) = connect(|req| match relative_path(&req.url) {
        "users/email/ghost@example.com" => ok(json!({})),
        _ => ok(json!({"id": "dm1"})),
    })
    .await;

    let err = client
        .create_private_channel("ghost@example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(transport.sent_to("POST", "channels/direct").is_empty());
}

#[tokio::test]
async fn non_success_statuses_propagate() {
    let (client, _) = connect(|req| match relative_path(&req.url) {
        "channels" => status(StatusCode::UNAUTHORIZED, json!({"message": "expired"})),
        _ => status(StatusCode::INTERNAL_SERVER_ERROR, json!({})),
    })
    .await;

    assert!(matches!(
        client.get_channels(true).await,
        Err(AppError::Unauthorized)
    ));
    assert!(matches!(
        client.get_wbs(false).await,
        Err(AppError::Unexpected(StatusCode::INTERNAL_SERVER_ERROR))
    ));
}

#[tokio::test]
async fn transport_errors_propagate_unchanged() {
    let (client, _) = connect(|_| Err(AppError::Transport("connection reset".to_string()))).await;

    match client.get_channels(false).await {
        Err(AppError::Transport(msg)) => assert_eq!(msg, "connection reset"),
        other => panic!("expected transport error, got {other:?}"),
    }
}
