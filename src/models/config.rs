//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_request_timeout_secs() -> u64 {
    15
}

#[derive(Clone, Debug, Deserialize)]
/// Settings consumed once at startup.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Log every SQL statement executed by the pool.
    #[serde(default)]
    pub database_debug: bool,
    /// Apply pending schema migrations before serving.
    #[serde(default)]
    pub database_migrate: bool,
    /// Page size used when a list request does not ask for one.
    pub default_page_limit: usize,
    /// Upper bound on reading a request and on client disconnects.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}
