/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A channel as returned by `GET channels` and `POST channels/direct`
///
/// Fields the client does not interpret are kept in `extra` and written back
/// unchanged on serialization.
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Channel {
    /// Channel id
    pub id: String,
    /// Team the channel belongs to; empty for direct channels
    #[serde(default)]
    pub team_id: String,
    /// Channel type: `O` open, `P` private, `D` direct, `G` group
    #[serde(rename = "type", default)]
    pub channel_type: String,
    /// Name shown in the UI
    #[serde(default)]
    pub display_name: String,
    /// URL name of the channel
    #[serde(default)]
    pub name: String,
    /// Soft-delete timestamp in milliseconds, `0` while the channel is live
    #[serde(default)]
    pub delete_at: i64,
    /// Every other field sent by the server
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Channel {
    /// Whether this is a two-party direct channel
    #[must_use]
    pub fn is_direct(&self) -> bool {
        self.channel_type == "D"
    }
}
