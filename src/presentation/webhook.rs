/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::NOT_DELETED;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An incoming webhook bound to a channel
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct IncomingWebhook {
    /// Webhook id, also the secret part of the hook URL
    pub id: String,
    /// Channel the webhook posts into
    pub channel_id: String,
    /// User that created the webhook
    #[serde(default)]
    pub user_id: String,
    /// Team of the bound channel
    #[serde(default)]
    pub team_id: String,
    /// Name shown in the integrations page
    #[serde(default)]
    pub display_name: String,
    /// Free text description
    #[serde(default)]
    pub description: String,
    /// Soft-delete timestamp in milliseconds, `0` while the webhook is live
    #[serde(default)]
    pub delete_at: i64,
    /// Every other field sent by the server
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IncomingWebhook {
    /// Whether the webhook has been soft-deleted
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.delete_at != NOT_DELETED
    }
}
