//! Core data models for Lynceus

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed classification of a single probe's outcome.
///
/// Each probe uses its own subset; `Error` is shared by all probes and
/// means the probe itself failed, leaving the target state unknown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Secure,
    Redirects,
    Insecure,
    NotApplicable,
    Valid,
    ExpiringSoon,
    Expired,
    Good,
    Warning,
    Info,
    Vulnerable,
    Safe,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Secure => "secure",
            Status::Redirects => "redirects",
            Status::Insecure => "insecure",
            Status::NotApplicable => "not_applicable",
            Status::Valid => "valid",
            Status::ExpiringSoon => "expiring_soon",
            Status::Expired => "expired",
            Status::Good => "good",
            Status::Warning => "warning",
            Status::Info => "info",
            Status::Vulnerable => "vulnerable",
            Status::Safe => "safe",
            Status::Error => "error",
        };
        write!(f, "{s}")
    }
}

impl Status {
    /// Whether this status indicates a problem worth highlighting
    pub fn is_negative(&self) -> bool {
        matches!(
            self,
            Status::Insecure
                | Status::Expired
                | Status::ExpiringSoon
                | Status::Warning
                | Status::Vulnerable
                | Status::Error
        )
    }
}

/// Robots.txt and sitemap presence summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RobotsDetails {
    pub robots_txt: String,
    pub sitemap_in_robots: bool,
    pub sitemap_xml: String,
}

/// Structured payload attached to some probe results.
///
/// Serialized untagged so the JSON shape stays what consumers expect:
/// a plain object for header maps and the robots summary, a plain array
/// for issue or path lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Details {
    Headers(IndexMap<String, String>),
    Robots(RobotsDetails),
    Items(Vec<String>),
}

/// Outcome of a single probe. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProbeResult {
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Details>,
}

impl ProbeResult {
    /// Creates a result with no details payload
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
        }
    }

    /// Attaches a details payload
    pub fn with_details(mut self, details: Details) -> Self {
        self.details = Some(details);
        self
    }

    /// Creates the reserved probe-failure result
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Status::Error, message)
    }
}

/// Aggregate result of running all probes once against one target.
///
/// `checks` always holds exactly the seven fixed probe names in registry
/// order; a failed probe is recorded under its name with `Status::Error`
/// rather than being removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub url: String,
    pub timestamp: DateTime<Utc>,
    pub checks: IndexMap<String, ProbeResult>,
}

impl Report {
    /// Filename for persisting this report, derived from its timestamp
    pub fn log_filename(&self) -> String {
        format!("scan_{}.json", self.timestamp.format("%Y%m%d_%H%M%S"))
    }

    /// Returns count of checks with a problematic status
    pub fn issue_count(&self) -> usize {
        self.checks
            .values()
            .filter(|r| r.status.is_negative())
            .count()
    }
}

/// Configuration for a scan session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Target URL to scan
    pub target: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Shorter timeout for the per-path directory listing requests
    pub path_timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
    /// Whether to follow HTTP redirects
    pub follow_redirects: bool,
    /// Directory where scan reports are persisted
    pub log_dir: String,
    /// Reserved for future probe sets; currently has no effect
    #[serde(default)]
    pub advanced: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            target: String::new(),
            timeout_secs: 10,
            path_timeout_secs: 5,
            user_agent: "Lynceus-Scanner/0.1.0".to_string(),
            follow_redirects: true,
            log_dir: "scan_logs".to_string(),
            advanced: false,
        }
    }
}
