//! Accounts API endpoint constants and configuration defaults.

use std::time::Duration;

/// Base URL used when none is configured (a locally running API).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Default number of retries for transient failures.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Account collection. Individual accounts live at `{ACCOUNTS}/{id}`.
pub const ACCOUNTS: &str = "/v1/organisation/accounts";

/// Environment variables read by
/// [`AccountsClientBuilder::from_env`](crate::rest::AccountsClientBuilder::from_env).
pub mod env {
    /// Base URL of the accounts API.
    pub const API_URL: &str = "ACCOUNTS_API_URL";
    /// Request timeout in whole seconds.
    pub const TIMEOUT_SECS: &str = "ACCOUNTS_API_TIMEOUT_SECS";
}
