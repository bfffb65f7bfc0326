/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Mattermost Client Prelude
//!
//! Re-exports the types needed for most interactions with the client.
//!
//! ```rust
//! use mattermost_client::prelude::*;
//!
//! let config = Config::with_credentials("bob", "secret", "127.0.0.1", 8065)
//!     .protocol(Protocol::Https);
//! assert!(config.validate().is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::config::{Config, Credentials, PaginationConfig, Protocol, ServerConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// SESSION AND CLIENT
// ============================================================================

pub use crate::application::auth::{Auth, Session};
pub use crate::application::client::Client;

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::interfaces::channel::ChannelService;
pub use crate::application::interfaces::user::UserService;
pub use crate::application::interfaces::webhook::WebhookService;

// ============================================================================
// TRANSPORT
// ============================================================================

pub use crate::model::http::{
    AuthorizedRequest, HttpRequest, HttpResponse, ReqwestTransport, Transport,
};

// ============================================================================
// MODELS
// ============================================================================

pub use crate::presentation::channel::Channel;
pub use crate::presentation::user::User;
pub use crate::presentation::webhook::IncomingWebhook;

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;
