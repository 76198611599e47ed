use tracing::{error, info, warn};

use crate::api::{FetchError, RateProvider};
use crate::models::StepOutput;

/// Run-once fetch step that publishes the current exchange rate
///
/// Every failure mode collapses to an absent rate plus a log line; nothing
/// propagates to the caller and nothing is retried.
pub struct RateFetcher<P> {
    provider: P,
}

impl<P: RateProvider + Sync> RateFetcher<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// One fetch attempt, collapsed to a nullable rate. Never fails.
    pub async fn fetch_rate(&self) -> Option<f64> {
        info!("Fetching exchange rate from API...");

        match self.provider.current_rate().await {
            Ok(Some(rate)) => {
                info!("Exchange rate fetched: {}", rate);
                Some(rate)
            }
            Ok(None) => {
                warn!("Rate payload carried no rate value");
                None
            }
            Err(FetchError::Api { status }) => {
                error!("API request failed with status: {}", status);
                None
            }
            Err(e) => {
                error!("Error fetching rate: {}", e);
                None
            }
        }
    }

    /// Execute the step, writing the output slot exactly once.
    pub async fn run(&self, output: &mut StepOutput) {
        output.current_rate = self.fetch_rate().await;
    }
}
