use crate::error::AppError;
use crate::presentation::webhook::IncomingWebhook;
use async_trait::async_trait;

/// Interface for incoming webhook operations
#[async_trait]
pub trait WebhookService: Send + Sync {
    /// Lists incoming webhooks
    ///
    /// # Arguments
    /// * `get_all` - Fetch every page instead of only the first one
    async fn get_wbs(&self, get_all: bool) -> Result<Vec<IncomingWebhook>, AppError>;

    /// Creates an incoming webhook owned by the logged-in user
    ///
    /// # Arguments
    /// * `channel_id` - Channel the webhook posts into
    /// * `channel_name` - Display name given to the webhook
    async fn create_webhook(
        &self,
        channel_id: &str,
        channel_name: &str,
    ) -> Result<IncomingWebhook, AppError>;

    /// Returns the id of a webhook bound to `channel_id`, creating one if none exists
    ///
    /// When several webhooks are bound to the channel the first one listed wins.
    async fn channel_bind_webhook(
        &self,
        channel_id: &str,
        channel_name: &str,
    ) -> Result<String, AppError>;

    /// Returns the id of the first webhook on the first page that is not soft-deleted
    async fn get_a_webhook(&self) -> Result<Option<String>, AppError>;
}
