/// Session manager: validation, login and the bearer token
pub mod auth;
/// Endpoint façade built on the session manager
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits implemented by the client
pub mod interfaces;
