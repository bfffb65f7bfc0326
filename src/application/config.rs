use crate::constants::{DEFAULT_API_VERSION, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS};
use crate::error::AppError;
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, error};

/// URL scheme used to reach the Mattermost server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Plain HTTP
    #[default]
    Http,
    /// HTTP over TLS
    Https,
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Http => write!(f, "http"),
            Protocol::Https => write!(f, "https"),
        }
    }
}

impl FromStr for Protocol {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            other => Err(AppError::Validation(format!(
                "protocol must be http or https, got {other:?}"
            ))),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Login credentials for the Mattermost account
pub struct Credentials {
    /// Login id (username or email)
    pub user: String,
    /// Account password, never serialized
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Location of the Mattermost REST API
pub struct ServerConfig {
    /// IPv4 address of the server
    pub host: String,
    /// TCP port of the server
    pub port: u16,
    /// URL scheme
    pub protocol: Protocol,
    /// API version path segment, e.g. `v4`
    pub api_version: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Pagination behaviour of list endpoints
pub struct PaginationConfig {
    /// Upper bound on pages fetched by one listing; `None` means unbounded
    pub max_pages: Option<u32>,
    /// Whether `channel_bind_webhook` scans every page of webhooks instead of only the first
    pub bind_scan_all: bool,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Mattermost API client
pub struct Config {
    /// Login credentials
    pub credentials: Credentials,
    /// Server location
    pub server: ServerConfig,
    /// Pagination behaviour
    pub pagination: PaginationConfig,
    /// Unparseable `MATTERMOST_PROTOCOL`, reported by [`Config::validate`]
    #[serde(skip)]
    invalid_protocol: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds a configuration from environment variables (and `.env` if present)
    ///
    /// Recognised variables: `MATTERMOST_USER`, `MATTERMOST_PASSWORD`,
    /// `MATTERMOST_HOST`, `MATTERMOST_PORT`, `MATTERMOST_PROTOCOL`,
    /// `MATTERMOST_API_VERSION`, `MATTERMOST_TIMEOUT`, `MATTERMOST_MAX_PAGES`
    /// and `MATTERMOST_BIND_SCAN_ALL`.
    ///
    /// Nothing is rejected here: an invalid `MATTERMOST_PROTOCOL` or host is
    /// reported by [`Config::validate`], so construction of a client fails.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let user = get_env_or_default("MATTERMOST_USER", String::from("default_user"));
        let password = get_env_or_default("MATTERMOST_PASSWORD", String::from("default_password"));

        if user == "default_user" {
            error!("MATTERMOST_USER not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("MATTERMOST_PASSWORD not found in environment variables or .env file");
        }

        let raw_protocol = get_env_or_default("MATTERMOST_PROTOCOL", String::from("http"));
        let (protocol, invalid_protocol) = match raw_protocol.parse::<Protocol>() {
            Ok(protocol) => (protocol, None),
            Err(e) => {
                error!("{e}");
                (Protocol::default(), Some(raw_protocol))
            }
        };

        Config {
            credentials: Credentials { user, password },
            server: ServerConfig {
                host: get_env_or_default("MATTERMOST_HOST", String::from(DEFAULT_HOST)),
                port: get_env_or_default("MATTERMOST_PORT", DEFAULT_PORT),
                protocol,
                api_version: get_env_or_default(
                    "MATTERMOST_API_VERSION",
                    String::from(DEFAULT_API_VERSION),
                ),
                timeout_secs: get_env_or_default("MATTERMOST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            pagination: PaginationConfig {
                max_pages: get_env_or_none("MATTERMOST_MAX_PAGES"),
                bind_scan_all: get_env_flag("MATTERMOST_BIND_SCAN_ALL", false),
            },
            invalid_protocol,
        }
    }

    /// Builds a configuration from explicit values, using defaults for the rest
    ///
    /// # Arguments
    /// * `user` - Login id
    /// * `password` - Account password
    /// * `host` - IPv4 address of the server
    /// * `port` - Port of the server
    pub fn with_credentials(
        user: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
        port: u16,
    ) -> Self {
        Config {
            credentials: Credentials {
                user: user.into(),
                password: password.into(),
            },
            server: ServerConfig {
                host: host.into(),
                port,
                protocol: Protocol::Http,
                api_version: DEFAULT_API_VERSION.to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
            pagination: PaginationConfig::default(),
            invalid_protocol: None,
        }
    }

    /// Sets the URL scheme
    #[must_use]
    pub fn protocol(mut self, protocol: Protocol) -> Self {
        self.server.protocol = protocol;
        self.invalid_protocol = None;
        self
    }

    /// Sets the API version segment
    #[must_use]
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.server.api_version = api_version.into();
        self
    }

    /// Sets the per-request timeout in seconds
    #[must_use]
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.server.timeout_secs = timeout_secs;
        self
    }

    /// Caps the number of pages a single listing may request
    #[must_use]
    pub fn max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.pagination.max_pages = max_pages;
        self
    }

    /// Makes `channel_bind_webhook` scan every page of webhooks
    #[must_use]
    pub fn bind_scan_all(mut self, bind_scan_all: bool) -> Self {
        self.pagination.bind_scan_all = bind_scan_all;
        self
    }

    /// Checks the invariants that must hold before any request is made
    ///
    /// # Returns
    /// * `Ok(())` - The protocol is `http`/`https`, the host is an IPv4 literal,
    ///   the timeout is positive and the page cap, if any, is positive
    /// * `Err(AppError::Validation)` - Otherwise
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(raw) = &self.invalid_protocol {
            return Err(AppError::Validation(format!(
                "protocol must be http or https, got {raw:?}"
            )));
        }
        self.server.host.parse::<Ipv4Addr>().map_err(|_| {
            AppError::Validation(format!(
                "host must be a valid IPv4 address, got {:?}",
                self.server.host
            ))
        })?;
        if self.server.timeout_secs == 0 {
            return Err(AppError::Validation(
                "timeout must be greater than zero".to_string(),
            ));
        }
        if self.pagination.max_pages == Some(0) {
            return Err(AppError::Validation(
                "max_pages must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Base URL every endpoint path is appended to
    ///
    /// Always ends with a slash: `{protocol}://{host}:{port}/api/{api_version}/`.
    #[must_use]
    pub fn server_url(&self) -> String {
        format!(
            "{}://{}:{}/api/{}/",
            self.server.protocol, self.server.host, self.server.port, self.server.api_version
        )
    }

    /// Per-request timeout
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.server.timeout_secs)
    }
}
