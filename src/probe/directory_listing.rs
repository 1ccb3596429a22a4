//! Directory listing exposure probe

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{Details, ProbeResult, ScanConfig, Status};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Checks common static-asset paths for enabled directory listings
pub struct DirectoryListingProbe;

/// Paths checked, in report order
const LISTING_PATHS: [&str; 4] = ["/images/", "/css/", "/js/", "/assets/"];

/// Response body fragments that indicate a directory index page
const LISTING_INDICATORS: [&str; 4] = [
    "Index of",
    "Directory Listing",
    "<title>Index of",
    "Parent Directory",
];

#[async_trait]
impl super::Probe for DirectoryListingProbe {
    fn name(&self) -> &'static str {
        super::DIRECTORY_LISTING
    }

    fn description(&self) -> &str {
        "Checks common asset paths for exposed directory listings"
    }

    async fn run(
        &self,
        client: &HttpClient,
        config: &ScanConfig,
        target: &Url,
    ) -> Result<ProbeResult> {
        let base = target.origin().ascii_serialization();
        let path_timeout = Duration::from_secs(config.path_timeout_secs);

        let mut vulnerable_paths = Vec::new();
        for path in LISTING_PATHS {
            let url = format!("{base}{path}");
            // A failing path is skipped; it never aborts the probe
            let response = match client.get_with_timeout(&url, path_timeout).await {
                Ok(response) => response,
                Err(e) => {
                    debug!("Skipping {url}: {e}");
                    continue;
                }
            };

            let body = response.text().await.unwrap_or_default();
            if LISTING_INDICATORS
                .iter()
                .any(|indicator| body.contains(indicator))
            {
                vulnerable_paths.push(path.to_string());
            }
        }

        if vulnerable_paths.is_empty() {
            Ok(ProbeResult::new(
                Status::Safe,
                "No directory listing vulnerabilities found",
            ))
        } else {
            Ok(
                ProbeResult::new(Status::Vulnerable, "Directory listing enabled")
                    .with_details(Details::Items(vulnerable_paths)),
            )
        }
    }
}
