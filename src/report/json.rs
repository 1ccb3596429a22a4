//! JSON report persistence

use crate::error::Result;
use crate::models::Report;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes a report into `log_dir` under a timestamp-derived filename
/// and returns the path written
pub fn save(report: &Report, log_dir: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(log_dir)?;
    let path = Path::new(log_dir).join(report.log_filename());
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(&path, json)?;
    info!("Scan report saved to {}", path.display());
    Ok(path)
}

/// Loads a previously persisted report
pub fn load(input_path: &Path) -> Result<Report> {
    let content = std::fs::read_to_string(input_path)?;
    let report: Report = serde_json::from_str(&content)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProbeResult, Status};
    use chrono::Utc;
    use indexmap::IndexMap;

    #[test]
    fn saved_report_loads_back_identically() {
        let mut checks = IndexMap::new();
        checks.insert(
            "HTTP to HTTPS".to_string(),
            ProbeResult::new(Status::Secure, "Already using HTTPS"),
        );
        let report = Report {
            url: "https://example.com".to_string(),
            timestamp: Utc::now(),
            checks,
        };

        let dir = std::env::temp_dir().join(format!("lynceus-json-test-{}", std::process::id()));
        let dir = dir.to_string_lossy().into_owned();
        let path = save(&report, &dir).expect("Save failed");
        assert!(path.file_name().is_some());

        let loaded = load(&path).expect("Load failed");
        assert_eq!(loaded.url, report.url);
        assert_eq!(loaded.checks, report.checks);

        let _ = std::fs::remove_file(&path);
    }
}
