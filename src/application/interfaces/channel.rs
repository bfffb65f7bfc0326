use crate::error::AppError;
use crate::presentation::channel::Channel;
use async_trait::async_trait;

/// Interface for channel operations
#[async_trait]
pub trait ChannelService: Send + Sync {
    /// Lists the channels visible to the logged-in user
    ///
    /// # Arguments
    /// * `get_all` - Fetch every page instead of only the first one
    async fn get_channels(&self, get_all: bool) -> Result<Vec<Channel>, AppError>;

    /// Opens (or returns the existing) direct channel with the user owning `email`
    ///
    /// # Arguments
    /// * `email` - Email of the other member
    ///
    /// # Returns
    /// * `Ok(Channel)` - The direct channel, as sent by the server
    /// * `Err(AppError::NotFound)` - No user owns `email`; no channel request is sent
    async fn create_private_channel(&self, email: &str) -> Result<Channel, AppError>;
}
