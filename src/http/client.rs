//! HTTP client wrapper with request tracking

use crate::error::Result;
use crate::models::ScanConfig;
use reqwest::{Client, Response};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Thin wrapper around reqwest with a shared request counter.
///
/// The counter lets tests assert that a probe performed no network calls.
/// Failed requests surface once as errors; the core performs no retries.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    request_count: Arc<AtomicU64>,
}

impl HttpClient {
    /// Creates a new HttpClient from scan configuration
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .cookie_store(true)
            .danger_accept_invalid_certs(false)
            .build()?;

        Ok(Self {
            client,
            request_count: Arc::new(AtomicU64::new(0)),
        })
    }

    /// Sends a GET request
    pub async fn get(&self, url: &str) -> Result<Response> {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        let response = self.client.get(url).send().await?;
        debug!("Response: {} for {}", response.status(), response.url());
        Ok(response)
    }

    /// Sends a GET request with a per-request timeout override
    pub async fn get_with_timeout(&self, url: &str, timeout: Duration) -> Result<Response> {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        let response = self.client.get(url).timeout(timeout).send().await?;
        debug!("Response: {} for {}", response.status(), response.url());
        Ok(response)
    }

    /// Returns the total number of requests made
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }
}
