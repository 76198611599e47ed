use serde::Deserialize;
use url::Url;

/// Rate API response envelope
///
/// Only `data.rate` is consumed; everything else the endpoint returns is
/// ignored. Both nesting levels are optional so a thin or empty payload
/// decodes cleanly instead of failing.
#[derive(Debug, Clone, Deserialize)]
pub struct RateEnvelope {
    pub data: Option<RateBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateBody {
    pub rate: Option<f64>,
}

impl RateEnvelope {
    /// Rate carried by the payload, if both levels are present.
    pub fn rate(&self) -> Option<f64> {
        self.data.as_ref().and_then(|d| d.rate)
    }
}

/// Shared output slot written by the fetch step
///
/// `current_rate` is the only externally observable state this unit
/// produces. It is written exactly once per run, on every execution path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepOutput {
    pub current_rate: Option<f64>,
}

pub const DEFAULT_RATE_ENDPOINT: &str = "https://v2.scopex.dev/misc/rate";
pub const DEFAULT_USER_AGENT: &str = "Maestro-Automation";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let endpoint = std::env::var("SCOPEX_RATE_URL")
            .unwrap_or_else(|_| DEFAULT_RATE_ENDPOINT.to_string());
        Url::parse(&endpoint)
            .map_err(|e| anyhow::anyhow!("invalid SCOPEX_RATE_URL '{}': {}", endpoint, e))?;

        Ok(Config {
            endpoint,
            user_agent: std::env::var("SCOPEX_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            timeout_secs: std::env::var("SCOPEX_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }
}
