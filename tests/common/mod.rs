//! Common test utilities

use lynceus::models::ScanConfig;

/// Creates a test ScanConfig pointing to a mock server
pub fn test_config(target: &str) -> ScanConfig {
    ScanConfig {
        target: target.to_string(),
        timeout_secs: 10,
        path_timeout_secs: 5,
        user_agent: "Lynceus-Test/0.1.0".to_string(),
        ..ScanConfig::default()
    }
}
