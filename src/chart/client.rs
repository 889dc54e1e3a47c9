use std::time::Duration;

use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    chart::{ChartData, DateRange},
    network::Network,
};

#[derive(Debug, Error)]
pub enum ChartClientError {
    #[error("chart request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("chart request failed after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: u32, last: reqwest::Error },
}

/// Capped exponential backoff. Replaces the old blocking
/// confirm-and-retry dialog with a bounded, unattended policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt` (0-based): `base * 2^attempt`,
    /// capped at `max_delay`.
    pub fn delay(&self, attempt: u32) -> Duration {
        self.base_delay
            .saturating_mul(1u32 << attempt.min(16))
            .min(self.max_delay)
    }
}

pub struct ChartClient {
    http: reqwest::Client,
    retry: RetryPolicy,
}

impl ChartClient {
    pub fn new(retry: RetryPolicy) -> Self {
        Self {
            http: reqwest::Client::new(),
            retry,
        }
    }

    /// Fetch the reward chart payload, retrying per the policy. A single
    /// request is in flight at a time.
    pub async fn fetch(
        &self,
        network: &Network,
        range: &DateRange,
    ) -> Result<ChartData, ChartClientError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.fetch_once(network, range).await {
                Ok(data) => {
                    debug!(
                        accounts = data.accounts.len(),
                        rewards = data.rewards.len(),
                        "chart data received"
                    );
                    return Ok(data);
                }
                Err(ChartClientError::Http(e)) if attempt < self.retry.max_attempts.max(1) => {
                    let delay = self.retry.delay(attempt - 1);
                    warn!(
                        error = %e,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        "chart fetch failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(ChartClientError::Http(e)) => {
                    return Err(ChartClientError::RetriesExhausted {
                        attempts: attempt,
                        last: e,
                    })
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// One GET against the network's chart endpoint, no retries.
    pub async fn fetch_once(
        &self,
        network: &Network,
        range: &DateRange,
    ) -> Result<ChartData, ChartClientError> {
        let data = self
            .http
            .get(network.data_url)
            .query(&[
                ("start_timestamp", range.start_timestamp_ms().to_string()),
                ("end_timestamp", range.end_timestamp_ms().to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<ChartData>()
            .await?;
        Ok(data)
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::RetryPolicy;

    #[test]
    fn backoff_doubles_and_caps() {
        let policy = RetryPolicy {
            max_attempts: 10,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(4),
        };
        assert_eq!(policy.delay(0), Duration::from_millis(500));
        assert_eq!(policy.delay(1), Duration::from_secs(1));
        assert_eq!(policy.delay(2), Duration::from_secs(2));
        assert_eq!(policy.delay(3), Duration::from_secs(4));
        assert_eq!(policy.delay(4), Duration::from_secs(4));
        assert_eq!(policy.delay(63), Duration::from_secs(4));
    }
}
