/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Session management for the Mattermost REST API
//!
//! [`Auth`] validates the configuration, logs in exactly once and keeps the
//! resulting [`Session`]. It hands out [`AuthorizedRequest`]s carrying the
//! bearer token captured at login. The token is never refreshed: when the
//! server starts rejecting it, build a new [`Auth`].

use crate::application::config::Config;
use crate::constants::TOKEN_HEADER;
use crate::error::AppError;
use crate::model::http::{AuthorizedRequest, Transport};
use crate::model::requests::LoginRequest;
use crate::model::responses::LoginResponse;
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, error, info};

/// State produced by a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Base URL of the API, ending with a slash
    pub server_url: String,
    /// Bearer token from the `Token` response header
    pub token: String,
    /// Id of the logged-in user
    pub user_id: String,
    /// Username of the logged-in user
    pub user_name: String,
}

impl Session {
    /// The `Authorization` header attached to every authenticated request
    #[must_use]
    pub fn auth_header(&self) -> (String, String) {
        ("Authorization".to_string(), format!("Bearer {}", self.token))
    }

    /// Joins an endpoint path onto the server URL
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path.trim_start_matches('/'))
    }
}

/// Session manager: owns the configuration, the transport and the login state
pub struct Auth<T: Transport + ?Sized> {
    config: Arc<Config>,
    transport: Arc<T>,
    session: Session,
}

impl<T: Transport + ?Sized> Auth<T> {
    /// Validates `config` and logs in
    ///
    /// # Arguments
    /// * `config` - Credentials and server location
    /// * `transport` - Transport used for the login and every later call
    ///
    /// # Returns
    /// * `Ok(Auth)` - Logged-in session manager
    /// * `Err(AppError::Validation)` - The configuration is invalid; nothing was sent
    /// * `Err(AppError::Authentication)` - The login call failed
    pub async fn connect(config: Arc<Config>, transport: Arc<T>) -> Result<Self, AppError> {
        config.validate()?;
        let session = login(&config, transport.as_ref()).await?;
        Ok(Self {
            config,
            transport,
            session,
        })
    }

    /// The session captured at login
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The configuration the session was built from
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying transport
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// A request capability bound to the login token and the configured timeout
    ///
    /// A new value is built on every call from the immutable session.
    #[must_use]
    pub fn requests(&self) -> AuthorizedRequest<'_, T> {
        AuthorizedRequest::new(
            self.transport.as_ref(),
            vec![self.session.auth_header()],
            self.config.timeout(),
        )
    }
}

/// Performs `POST users/login` and builds the session from the response
///
/// The token comes from the `Token` response header and the user from the
/// JSON body. Any failure, including a transport error, is reported as
/// [`AppError::Authentication`].
pub async fn login<T: Transport + ?Sized>(
    config: &Config,
    transport: &T,
) -> Result<Session, AppError> {
    let server_url = config.server_url();
    let url = format!("{server_url}users/login");

    info!(
        "Logging in to {} as {}",
        server_url, config.credentials.user
    );

    let payload = LoginRequest {
        login_id: &config.credentials.user,
        password: &config.credentials.password,
    };
    let body = serde_json::to_value(&payload)?;

    let response = AuthorizedRequest::anonymous(transport, config.timeout())
        .request(Method::POST, &url, &[], Some(body))
        .await
        .map_err(|e| {
            error!("Login request failed: {}", e);
            AppError::Authentication(format!("login request failed: {e}"))
        })?;

    if !response.status.is_success() {
        error!(
            "Login failed with status {}: {}",
            response.status,
            response.text()
        );
        return Err(AppError::Authentication(format!(
            "login rejected with status {}",
            response.status
        )));
    }

    let token = response
        .header(TOKEN_HEADER)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .ok_or_else(|| {
            error!("Login response carries no {} header", TOKEN_HEADER);
            AppError::Authentication(format!("missing {TOKEN_HEADER} header in login response"))
        })?;

    let user: LoginResponse = response.json().map_err(|e| {
        AppError::Authentication(format!("unreadable login response body: {e}"))
    })?;

    let (Some(user_id), Some(user_name)) = (user.id, user.username) else {
        error!("Login response body lacks id or username");
        return Err(AppError::Authentication(
            "login response body lacks id or username".to_string(),
        ));
    };

    debug!("Session opened for user id {}", user_id);
    info!("✓ Login successful, user: {}", user_name);

    Ok(Session {
        server_url,
        token,
        user_id,
        user_name,
    })
}
