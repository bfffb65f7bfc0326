/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;
/// Default REST API version segment
pub const DEFAULT_API_VERSION: &str = "v4";
/// Default Mattermost server host
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default Mattermost server port
pub const DEFAULT_PORT: u16 = 8065;
/// User agent string used in HTTP requests to identify this client to the Mattermost server
pub const USER_AGENT: &str = "mattermost-client/0.1.0";
/// Response header carrying the session token after a successful login
pub const TOKEN_HEADER: &str = "Token";
/// Query parameter holding the zero-based page index on list endpoints
pub const PAGE_PARAM: &str = "page";
/// Value of `delete_at` for records that have not been soft-deleted
pub const NOT_DELETED: i64 = 0;
