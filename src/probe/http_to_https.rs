//! HTTP to HTTPS redirect probe

use crate::error::{LynceusError, Result};
use crate::http::HttpClient;
use crate::models::{ProbeResult, ScanConfig, Status};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Checks whether plain HTTP traffic is redirected to HTTPS
pub struct HttpToHttpsProbe;

#[async_trait]
impl super::Probe for HttpToHttpsProbe {
    fn name(&self) -> &'static str {
        super::HTTP_TO_HTTPS
    }

    fn description(&self) -> &str {
        "Checks whether plain HTTP requests are redirected to HTTPS"
    }

    async fn run(
        &self,
        client: &HttpClient,
        _config: &ScanConfig,
        target: &Url,
    ) -> Result<ProbeResult> {
        if target.scheme() == "https" {
            return Ok(ProbeResult::new(Status::Secure, "Already using HTTPS"));
        }

        let host = target
            .host_str()
            .ok_or_else(|| LynceusError::ProbeError("target URL has no host".to_string()))?;
        let http_url = match target.port() {
            Some(port) => format!("http://{host}:{port}{}", target.path()),
            None => format!("http://{host}{}", target.path()),
        };

        debug!("Requesting {http_url} with redirects enabled");
        let response = client.get(&http_url).await?;

        if response.url().scheme() == "https" {
            Ok(ProbeResult::new(
                Status::Redirects,
                "HTTP properly redirects to HTTPS",
            ))
        } else {
            Ok(ProbeResult::new(
                Status::Insecure,
                "HTTP does not redirect to HTTPS",
            ))
        }
    }
}
