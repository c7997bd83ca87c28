//! Settlement API constants shared by the client and the CLI.

/// Default base URL of the settlement service.
pub const DEFAULT_BASE_URL: &str = "https://api.payos.com";
/// Placeholder API key used when none is configured.
pub const DEFAULT_API_KEY: &str = "pk_test_...";
/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "PAYOS_API_KEY";
/// Environment variable holding the base URL.
pub const BASE_URL_ENV: &str = "PAYOS_BASE_URL";
/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_ENV: &str = "PAYOS_TIMEOUT_SECS";

/// Client-identifying header sent with every request.
pub const AGENT_HEADER: &str = "UCP-Agent";

/// Request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Interval between two settlement status polls, in seconds.
pub const POLL_INTERVAL_SECS: u64 = 2;
/// Default upper bound for `wait_for_completion`, in seconds.
pub const DEFAULT_MAX_WAIT_SECS: u64 = 120;

/// `POST`: FX quote for a corridor.
pub const QUOTE_PATH: &str = "/v1/ucp/quote";
/// `POST`: settlement token acquisition.
pub const TOKENS_PATH: &str = "/v1/ucp/tokens";
/// `POST`: settlement execution.
pub const SETTLE_PATH: &str = "/v1/ucp/settle";
/// `GET`: settlement records, followed by `/{id}`.
pub const SETTLEMENTS_PATH: &str = "/v1/ucp/settlements";

/// Default `UCP-Agent` value, e.g. `ucp-client-rs/0.1.0`.
pub fn default_agent() -> String {
    format!("ucp-client-rs/{}", env!("CARGO_PKG_VERSION"))
}
