/// Module containing environment-driven configuration helpers
pub mod config;
/// Module containing email address validation
pub mod email;
/// Module containing logging utilities
pub mod logger;

pub use config::*;
pub use email::*;
pub use logger::*;
