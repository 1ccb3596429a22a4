//! Probe engine and trait definitions

pub mod cookie_flags;
pub mod directory_listing;
pub mod http_to_https;
pub mod robots;
pub mod security_headers;
pub mod server_banner;
pub mod ssl_certificate;

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{ProbeResult, Report, ScanConfig};
use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use std::sync::Arc;
use tracing::{info, warn};
use url::Url;

/// Display names under which probe results are keyed in a report
pub const HTTP_TO_HTTPS: &str = "HTTP to HTTPS";
pub const SSL_CERTIFICATE: &str = "SSL Certificate";
pub const SECURITY_HEADERS: &str = "Security Headers";
pub const COOKIE_FLAGS: &str = "Cookie Flags";
pub const ROBOTS_TXT: &str = "Robots.txt";
pub const DIRECTORY_LISTING: &str = "Directory Listing";
pub const SERVER_BANNER: &str = "Server Banner";

/// The fixed probe set, in execution order
pub const PROBE_NAMES: [&str; 7] = [
    HTTP_TO_HTTPS,
    SSL_CERTIFICATE,
    SECURITY_HEADERS,
    COOKIE_FLAGS,
    ROBOTS_TXT,
    DIRECTORY_LISTING,
    SERVER_BANNER,
];

/// Trait that all probes must implement.
///
/// A probe is a single stateless check against a target URL producing one
/// `ProbeResult`. Probes return `Err` for their own failures; the engine
/// converts that into the reserved `error` status for that probe only.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Returns the display name used as the report key
    fn name(&self) -> &'static str;

    /// Returns a description of what this probe checks
    fn description(&self) -> &str;

    /// Executes the check against the parsed target URL
    async fn run(
        &self,
        client: &HttpClient,
        config: &ScanConfig,
        target: &Url,
    ) -> Result<ProbeResult>;
}

/// Orchestrates the execution of all registered probes against one target.
///
/// The engine itself is stateless; report persistence and the run log are
/// owned by the caller.
pub struct ProbeEngine {
    probes: Vec<Arc<dyn Probe>>,
}

impl ProbeEngine {
    /// Creates a new ProbeEngine with no registered probes
    pub fn new() -> Self {
        Self { probes: Vec::new() }
    }

    /// Creates a ProbeEngine with the seven default probes registered,
    /// in the fixed report order
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.register(Arc::new(http_to_https::HttpToHttpsProbe));
        engine.register(Arc::new(ssl_certificate::SslCertificateProbe));
        engine.register(Arc::new(security_headers::SecurityHeadersProbe));
        engine.register(Arc::new(cookie_flags::CookieFlagsProbe));
        engine.register(Arc::new(robots::RobotsProbe));
        engine.register(Arc::new(directory_listing::DirectoryListingProbe));
        engine.register(Arc::new(server_banner::ServerBannerProbe));
        engine
    }

    /// Registers a new probe
    pub fn register(&mut self, probe: Arc<dyn Probe>) {
        self.probes.push(probe);
    }

    /// Returns information about all registered probes
    pub fn list_probes(&self) -> Vec<(&str, &str)> {
        self.probes
            .iter()
            .map(|p| (p.name(), p.description()))
            .collect()
    }

    /// Runs all probes against the configured target and assembles a report
    pub async fn run(&self, config: &ScanConfig) -> Result<Report> {
        let client = HttpClient::from_config(config)?;
        self.run_with_client(&client, config).await
    }

    /// Runs all probes using a caller-supplied client.
    ///
    /// An unparseable target URL is the only fatal condition and fails the
    /// whole scan. Any individual probe failure is recorded under that
    /// probe's name with the `error` status and never aborts the remaining
    /// probes, so the report always carries one entry per registered probe.
    pub async fn run_with_client(
        &self,
        client: &HttpClient,
        config: &ScanConfig,
    ) -> Result<Report> {
        let target = Url::parse(&config.target)?;

        let mut checks = IndexMap::with_capacity(self.probes.len());
        for probe in &self.probes {
            info!("Running probe: {}", probe.name());
            let result = match probe.run(client, config, &target).await {
                Ok(result) => result,
                Err(e) => {
                    warn!("Probe '{}' failed: {e}", probe.name());
                    ProbeResult::error(e.to_string())
                }
            };
            checks.insert(probe.name().to_string(), result);
        }

        // Timestamp is taken at assembly time, not at probe start
        Ok(Report {
            url: config.target.clone(),
            timestamp: Utc::now(),
            checks,
        })
    }
}

impl Default for ProbeEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
