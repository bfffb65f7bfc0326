/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Mattermost Client
//!
//! A thin async client for the Mattermost REST API (v4).
//!
//! The client logs in once when it is built, keeps the bearer token returned
//! by the server, and attaches it to every call it makes afterwards. On top
//! of that it exposes the handful of endpoints this crate covers:
//!
//! - channel listing (paginated)
//! - incoming webhook listing, creation and channel binding
//! - user lookup by email
//! - direct channel creation
//!
//! ## Example
//!
//! ```ignore
//! use mattermost_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = Client::new(Config::new()).await?;
//!
//!     let channels = client.get_channels(true).await?;
//!     let hook_id = client.channel_bind_webhook(&channels[0].id, "General").await?;
//!     println!("webhook: {hook_id}");
//!     Ok(())
//! }
//! ```
//!
//! The token is fetched once and never refreshed. When the server starts
//! answering `401`, build a new [`application::client::Client`].

/// Session management and endpoint façade
pub mod application;
/// Library wide constants
pub mod constants;
/// Error type returned by every fallible operation
pub mod error;
/// Transport, pagination and wire models
pub mod model;
/// Prelude with the most commonly used types
pub mod prelude;
/// Records returned by the server
pub mod presentation;
/// Configuration and logging helpers
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
