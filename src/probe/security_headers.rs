//! Security headers presence probe

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{Details, ProbeResult, ScanConfig, Status};
use async_trait::async_trait;
use indexmap::IndexMap;
use tracing::debug;
use url::Url;

/// Checks for the presence of key security response headers
pub struct SecurityHeadersProbe;

/// Headers checked, in the order they are reported when missing
const SECURITY_HEADERS: [&str; 5] = [
    "Strict-Transport-Security",
    "X-Content-Type-Options",
    "X-Frame-Options",
    "Content-Security-Policy",
    "X-XSS-Protection",
];

#[async_trait]
impl super::Probe for SecurityHeadersProbe {
    fn name(&self) -> &'static str {
        super::SECURITY_HEADERS
    }

    fn description(&self) -> &str {
        "Checks for the presence of key HTTP security headers"
    }

    async fn run(
        &self,
        client: &HttpClient,
        _config: &ScanConfig,
        target: &Url,
    ) -> Result<ProbeResult> {
        let response = client.get(target.as_str()).await?;
        let headers = response.headers();

        let mut present = IndexMap::new();
        let mut missing = Vec::new();

        for name in SECURITY_HEADERS {
            // HeaderMap lookups are case-insensitive
            match headers.get(name).and_then(|v| v.to_str().ok()) {
                Some(value) => {
                    debug!("Header '{name}' present");
                    present.insert(name.to_string(), value.to_string());
                }
                None => missing.push(name),
            }
        }

        if missing.is_empty() {
            Ok(
                ProbeResult::new(Status::Good, "All key security headers present")
                    .with_details(Details::Headers(present)),
            )
        } else {
            Ok(ProbeResult::new(
                Status::Warning,
                format!("Missing headers: {}", missing.join(", ")),
            )
            .with_details(Details::Headers(present)))
        }
    }
}
