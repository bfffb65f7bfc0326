/// Channel service interface
pub mod channel;
/// User service interface
pub mod user;
/// Incoming webhook service interface
pub mod webhook;
