use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Connection settings shared by every call a [`Client`](super::client::Client) makes.
///
/// Built by the caller. Nothing here is read from the process environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Prefix for every endpoint path, e.g. `https://api.openai.com/v1`.
    pub base_url: String,

    /// Sent as the `OpenAI-Organization` header when set.
    pub organization: Option<String>,

    /// Per-request deadline handed to the transport.
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            organization: None,
            timeout: None,
        }
    }
}
