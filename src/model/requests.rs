/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use serde::Serialize;

/// Body of `POST users/login`
#[derive(Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Username or email
    pub login_id: &'a str,
    /// Account password
    pub password: &'a str,
}

/// Body of `POST hooks/incoming`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateWebhookRequest<'a> {
    /// Channel the webhook posts into
    pub channel_id: &'a str,
    /// Owner of the webhook, the logged-in user
    pub user_id: &'a str,
    /// Name shown in the integrations page
    pub display_name: &'a str,
}

/// Body of `POST channels/direct`: the two members, logged-in user first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectChannelRequest<'a>(pub [&'a str; 2]);

impl<'a> DirectChannelRequest<'a> {
    /// Pairs the logged-in user with the other member
    #[must_use]
    pub fn new(from_user_id: &'a str, to_user_id: &'a str) -> Self {
        Self([from_user_id, to_user_id])
    }
}
