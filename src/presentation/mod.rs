/// Channel models
pub mod channel;
/// User models
pub mod user;
/// Incoming webhook models
pub mod webhook;
