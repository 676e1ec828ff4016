use serde::Deserialize;

/// Response body of `GET /rate_limit`.
#[derive(Debug, Deserialize)]
pub struct RateLimits {
    #[serde(rename = "resources")]
    resources: Resources,
}

impl RateLimits {
    /// Limits for the core REST API, the bucket every other call in this crate draws from.
    pub fn core(&self) -> &Rate {
        &self.resources.core
    }
}

#[derive(Debug, Deserialize)]
struct Resources {
    #[serde(rename = "core")]
    core: Rate,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct Rate {
    #[serde(rename = "limit")]
    pub limit: u64,

    #[serde(rename = "remaining")]
    pub remaining: u64,
}
