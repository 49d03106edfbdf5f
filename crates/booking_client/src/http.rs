//! Shared HTTP client construction.
//!
//! Retry logic is handled by reqwest-retry middleware at the client level;
//! callers never retry by hand.

use anyhow::anyhow;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};

pub(crate) fn build_http_client() -> anyhow::Result<Client> {
    Client::builder()
        .build()
        .map_err(|e| anyhow!("Failed to build HTTP client: {e}"))
}

pub(crate) fn build_retry_client(client: Client) -> ClientWithMiddleware {
    // Exponential backoff: 1s, 2s, 4s with jitter
    let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);

    ClientBuilder::new(client)
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build()
}
