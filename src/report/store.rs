//! In-memory log of completed scans

use crate::models::Report;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Caller-owned log of past reports.
///
/// The probe engine is stateless; whoever drives it (the web server, the
/// CLI) constructs a log and appends fully assembled reports to it.
#[derive(Clone, Default)]
pub struct ScanLog {
    reports: Arc<RwLock<Vec<Report>>>,
}

impl ScanLog {
    /// Creates an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a completed report
    pub async fn push(&self, report: Report) {
        self.reports.write().await.push(report);
    }

    /// Returns a snapshot of all logged reports
    pub async fn all(&self) -> Vec<Report> {
        self.reports.read().await.clone()
    }

    /// Returns the number of logged reports
    pub async fn len(&self) -> usize {
        self.reports.read().await.len()
    }

    /// Whether the log holds no reports yet
    pub async fn is_empty(&self) -> bool {
        self.reports.read().await.is_empty()
    }
}
