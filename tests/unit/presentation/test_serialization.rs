use assert_json_diff::assert_json_eq;
use mattermost_client::prelude::*;
use serde_json::json;

#[test]
fn channel_keeps_unknown_fields_verbatim() {
    let raw = json!({
        "id": "4xp9fdt77pncbef59f4k1qe83o",
        "create_at": 1_700_000_000_000_i64,
        "team_id": "t1",
        "type": "O",
        "display_name": "Town Square",
        "name": "town-square",
        "header": "",
        "delete_at": 0,
        "total_msg_count": 42
    });

    let channel: Channel = serde_json::from_value(raw.clone()).unwrap();
    assert_eq!(channel.channel_type, "O");
    assert!(!channel.is_direct());
    assert_eq!(channel.extra.len(), 3);

    assert_json_eq!(serde_json::to_value(&channel).unwrap(), raw);
}

#[test]
fn webhook_soft_delete_flag() {
    let live: IncomingWebhook =
        serde_json::from_value(json!({"id": "h1", "channel_id": "c1", "delete_at": 0})).unwrap();
    let gone: IncomingWebhook =
        serde_json::from_value(json!({"id": "h2", "channel_id": "c1", "delete_at": 1700000000000_i64}))
            .unwrap();
    let implicit: IncomingWebhook =
        serde_json::from_value(json!({"id": "h3", "channel_id": "c1"})).unwrap();

    assert!(!live.is_deleted());
    assert!(gone.is_deleted());
    assert!(!implicit.is_deleted());
}

#[test]
fn webhook_requires_id_and_channel() {
    assert!(serde_json::from_value::<IncomingWebhook>(json!({"channel_id": "c1"})).is_err());
    assert!(serde_json::from_value::<IncomingWebhook>(json!({"id": "h1"})).is_err());
}

#[test]
fn user_without_id_deserializes_with_empty_id() {
    let user: User = serde_json::from_value(json!({"username": "ghost"})).unwrap();
    assert!(user.id.is_empty());
    assert_eq!(user.username, "ghost");
}

#[test]
fn display_is_compact_json() {
    let user = User {
        id: "u1".to_string(),
        username: "bob".to_string(),
        ..Default::default()
    };
    let shown = user.to_string();
    assert!(shown.starts_with('{'));
    assert!(shown.contains(r#""username":"bob""#));
}
