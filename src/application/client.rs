/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Endpoint façade for the Mattermost REST API
//!
//! # Example
//! ```ignore
//! use mattermost_client::prelude::*;
//!
//! let config = Config::with_credentials("bob", "secret", "10.0.0.5", 8065);
//! let client = Client::new(config).await?;
//!
//! let hook = client.channel_bind_webhook("4xp9fdt77pncbef59f4k1qe83o", "General").await?;
//! ```

use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::application::interfaces::channel::ChannelService;
use crate::application::interfaces::user::UserService;
use crate::application::interfaces::webhook::WebhookService;
use crate::error::AppError;
use crate::model::http::{AuthorizedRequest, ReqwestTransport, Transport};
use crate::model::paging::page_data;
use crate::model::requests::{CreateWebhookRequest, DirectChannelRequest};
use crate::presentation::channel::Channel;
use crate::presentation::user::User;
use crate::presentation::webhook::IncomingWebhook;
use crate::utils::email::validate_email;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Mattermost client, logged in once at construction
///
/// Every endpoint call reuses the bearer token obtained by the login and
/// awaits its round-trips one after the other.
pub struct Client<T: Transport + ?Sized = ReqwestTransport> {
    auth: Auth<T>,
}

impl Client<ReqwestTransport> {
    /// Creates a client on a `reqwest` transport and logs in
    ///
    /// # Arguments
    /// * `config` - Credentials and server location
    ///
    /// # Returns
    /// * `Ok(Client)` - Authenticated client ready to use
    /// * `Err(AppError::Validation)` - Invalid protocol, host, timeout or page cap
    /// * `Err(AppError::Authentication)` - Login failed
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let transport = ReqwestTransport::new()?;
        Self::with_transport(config, Arc::new(transport)).await
    }
}

impl<T: Transport + ?Sized> Client<T> {
    /// Creates a client on a caller supplied transport and logs in
    pub async fn with_transport(config: Config, transport: Arc<T>) -> Result<Self, AppError> {
        let auth = Auth::connect(Arc::new(config), transport).await?;
        Ok(Self { auth })
    }

    /// The session captured at login
    #[must_use]
    pub fn session(&self) -> &Session {
        self.auth.session()
    }

    /// Base URL of the API
    #[must_use]
    pub fn server_url(&self) -> &str {
        &self.auth.session().server_url
    }

    /// Id of the logged-in user
    #[must_use]
    pub fn login_user_id(&self) -> &str {
        &self.auth.session().user_id
    }

    /// Username of the logged-in user
    #[must_use]
    pub fn login_user_name(&self) -> &str {
        &self.auth.session().user_name
    }

    /// The configuration the client was built with
    #[must_use]
    pub fn config(&self) -> &Config {
        self.auth.config()
    }

    /// Gets Auth reference
    #[must_use]
    pub fn auth(&self) -> &Auth<T> {
        &self.auth
    }

    /// A fresh request capability carrying the login token
    #[must_use]
    pub fn requests(&self) -> AuthorizedRequest<'_, T> {
        self.auth.requests()
    }

    fn url(&self, path: &str) -> String {
        self.auth.session().url(path)
    }

    async fn list<R: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        get_all: bool,
    ) -> Result<Vec<R>, AppError> {
        let url = self.url(path);
        page_data(
            &self.requests(),
            &url,
            get_all,
            self.config().pagination.max_pages,
        )
        .await
    }
}

#[async_trait]
impl<T: Transport + ?Sized + 'static> ChannelService for Client<T> {
    async fn get_channels(&self, get_all: bool) -> Result<Vec<Channel>, AppError> {
        info!("Getting channels (all pages: {})", get_all);
        let channels: Vec<Channel> = self.list("channels", get_all).await?;
        debug!("Channels obtained: {}", channels.len());
        Ok(channels)
    }

    async fn create_private_channel(&self, email: &str) -> Result<Channel, AppError> {
        let user = self.get_user_by_email(email).await?;
        if user.id.is_empty() {
            warn!("User lookup for {} returned no id", email);
            return Err(AppError::NotFound(format!("user with email {email}")));
        }

        info!("Opening direct channel with {}", user.username);
        let body = DirectChannelRequest::new(self.login_user_id(), &user.id);
        let channel: Channel = self.requests().post(&self.url("channels/direct"), &body).await?;

        debug!("Direct channel obtained: {}", channel.id);
        Ok(channel)
    }
}

#[async_trait]
impl<T: Transport + ?Sized + 'static> WebhookService for Client<T> {
    async fn get_wbs(&self, get_all: bool) -> Result<Vec<IncomingWebhook>, AppError> {
        info!("Getting incoming webhooks (all pages: {})", get_all);
        let webhooks: Vec<IncomingWebhook> = self.list("hooks/incoming", get_all).await?;
        debug!("Incoming webhooks obtained: {}", webhooks.len());
        Ok(webhooks)
    }

    async fn create_webhook(
        &self,
        channel_id: &str,
        channel_name: &str,
    ) -> Result<IncomingWebhook, AppError> {
        info!("Creating incoming webhook for channel {}", channel_id);
        let body = CreateWebhookRequest {
            channel_id,
            user_id: self.login_user_id(),
            display_name: channel_name,
        };
        let webhook: IncomingWebhook =
            self.requests().post(&self.url("hooks/incoming"), &body).await?;
        info!("✓ Incoming webhook {} created", webhook.id);
        Ok(webhook)
    }

    async fn channel_bind_webhook(
        &self,
        channel_id: &str,
        channel_name: &str,
    ) -> Result<String, AppError> {
        let scan_all = self.config().pagination.bind_scan_all;
        let webhooks = self.get_wbs(scan_all).await?;

        if let Some(existing) = webhooks.into_iter().find(|w| w.channel_id == channel_id) {
            debug!("Channel {} already bound to webhook {}", channel_id, existing.id);
            return Ok(existing.id);
        }

        let created = self.create_webhook(channel_id, channel_name).await?;
        Ok(created.id)
    }

    async fn get_a_webhook(&self) -> Result<Option<String>, AppError> {
        let webhooks = self.get_wbs(false).await?;
        Ok(webhooks
            .into_iter()
            .find(|w| !w.is_deleted())
            .map(|w| w.id))
    }
}

#[async_trait]
impl<T: Transport + ?Sized + 'static> UserService for Client<T> {
    async fn get_user_by_email(&self, email: &str) -> Result<User, AppError> {
        let email = validate_email(email)?;
        info!("Getting user by email");
        let url = self.url(&format!("users/email/{email}"));
        match self.requests().get::<User>(&url, &[]).await {
            Err(AppError::NotFound(_)) => Err(AppError::NotFound(format!("user with email {email}"))),
            other => other,
        }
    }
}
