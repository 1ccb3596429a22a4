//! Robots.txt and sitemap presence probe

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{Details, ProbeResult, RobotsDetails, ScanConfig, Status};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

/// Reports whether robots.txt and a sitemap are published
pub struct RobotsProbe;

/// Sitemap locations probed when robots.txt does not settle the question
const SITEMAP_PATHS: [&str; 2] = ["/sitemap.xml", "/sitemap_index.xml"];

fn found_label(present: bool) -> String {
    let label = if present { "Found" } else { "Not found" };
    label.to_string()
}

#[async_trait]
impl super::Probe for RobotsProbe {
    fn name(&self) -> &'static str {
        super::ROBOTS_TXT
    }

    fn description(&self) -> &str {
        "Checks for robots.txt and sitemap presence"
    }

    async fn run(
        &self,
        client: &HttpClient,
        _config: &ScanConfig,
        target: &Url,
    ) -> Result<ProbeResult> {
        let base = target.origin().ascii_serialization();

        // Individual fetch failures count as "not found" for this probe
        let mut robots_exists = false;
        let mut sitemap_in_robots = false;
        if let Ok(response) = client.get(&format!("{base}/robots.txt")).await {
            if response.status() == StatusCode::OK {
                robots_exists = true;
                let body = response.text().await.unwrap_or_default();
                sitemap_in_robots = body.to_lowercase().contains("sitemap:");
            }
        }

        let mut sitemap_exists = false;
        for path in SITEMAP_PATHS {
            debug!("Probing sitemap location {path}");
            if let Ok(response) = client.get(&format!("{base}{path}")).await {
                if response.status() == StatusCode::OK {
                    sitemap_exists = true;
                    break;
                }
            }
        }

        Ok(ProbeResult::new(
            Status::Info,
            "Robots.txt and sitemap check complete",
        )
        .with_details(Details::Robots(RobotsDetails {
            robots_txt: found_label(robots_exists),
            sitemap_in_robots,
            sitemap_xml: found_label(sitemap_exists),
        })))
    }
}
