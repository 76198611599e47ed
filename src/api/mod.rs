use async_trait::async_trait;

pub mod scopex_client;
pub use scopex_client::ScopexClient;

/// How a rate fetch attempt failed
///
/// A well-formed body without a `data.rate` field is not a failure; it
/// surfaces as `Ok(None)` from the provider.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("API request failed with status: {status}")]
    Api { status: u16 },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("malformed rate payload: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport(format!("{:#}", err))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(format!("{:#}", err))
    }
}

/// Common trait for exchange-rate providers
#[async_trait]
pub trait RateProvider {
    /// Fetch the current rate once.
    ///
    /// `Ok(None)` means the endpoint answered with a 2xx but the payload
    /// carried no rate value.
    async fn current_rate(&self) -> Result<Option<f64>, FetchError>;
}
