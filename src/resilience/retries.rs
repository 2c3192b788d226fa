//! Retry logic.
//!
//! # Responsibilities
//! - Deliver an import request with a bounded number of attempts
//! - Wait a fixed delay between attempts
//! - Report how many attempts were made
//!
//! # Design Decisions
//! - Only transport failures are retried (connect errors, unreadable body)
//! - A received HTTP response is final whatever its status
//! - Exhausting every attempt is not an error here; the outcome simply
//!   has no result and the caller decides what that means

use std::time::Duration;
use url::Url;

use crate::config::{DeliveryConfig, Endpoints};
use crate::error::MigrationResult;
use crate::http::client::Transport;
use crate::http::response::ImportResult;

/// How often and how patiently to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, first one included.
    pub max_attempts: u32,
    /// Fixed delay between consecutive attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&DeliveryConfig::default())
    }
}

impl From<&DeliveryConfig> for RetryPolicy {
    fn from(config: &DeliveryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            delay: config.retry_delay(),
        }
    }
}

/// What came back from a delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOutcome {
    /// Attempts made, between 1 and `max_attempts`.
    pub attempts: u32,
    /// `None` when every attempt failed at the transport level.
    pub result: Option<ImportResult>,
}

/// Delivers request bodies to one keymanager endpoint.
pub struct DeliveryEngine<T> {
    transport: T,
    url: Url,
    virtual_host: String,
    policy: RetryPolicy,
}

impl<T: Transport> DeliveryEngine<T> {
    pub fn new(transport: T, endpoints: &Endpoints, policy: RetryPolicy) -> MigrationResult<Self> {
        Ok(Self {
            transport,
            url: endpoints.keystores_url()?,
            virtual_host: endpoints.virtual_host.clone(),
            policy,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// POST `body`, retrying transport failures.
    pub async fn deliver(&self, body: &str) -> DeliveryOutcome {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempts = 0;

        while attempts < max_attempts {
            attempts += 1;

            match self.transport.post(&self.url, &self.virtual_host, body).await {
                Ok(result) => {
                    tracing::debug!(attempt = attempts, status = result.status, "Delivery completed");
                    return DeliveryOutcome {
                        attempts,
                        result: Some(result),
                    };
                }
                Err(e) => {
                    tracing::warn!(
                        attempt = attempts,
                        max_attempts,
                        error = %e,
                        "Delivery attempt failed"
                    );
                    if attempts < max_attempts {
                        tracing::info!(attempt = attempts, delay = ?self.policy.delay, "Retrying delivery");
                        tokio::time::sleep(self.policy.delay).await;
                    }
                }
            }
        }

        tracing::error!(attempts, url = %self.url, "All delivery attempts failed");
        DeliveryOutcome {
            attempts,
            result: None,
        }
    }
}
