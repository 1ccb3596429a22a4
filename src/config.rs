//! Configuration management for Lynceus

use crate::error::{LynceusError, Result};
use crate::models::ScanConfig;
use serde::Deserialize;
use std::path::Path;

/// File-based configuration structure matching config/default.toml
#[derive(Debug, Deserialize)]
struct FileConfig {
    scan: Option<ScanSection>,
    server: Option<ServerSection>,
}

#[derive(Debug, Deserialize)]
struct ScanSection {
    timeout_secs: Option<u64>,
    path_timeout_secs: Option<u64>,
    user_agent: Option<String>,
    follow_redirects: Option<bool>,
    log_dir: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ServerSection {
    port: Option<u16>,
}

/// Settings loaded from a config file
#[derive(Debug)]
pub struct Settings {
    pub scan: ScanConfig,
    pub server_port: Option<u16>,
}

/// Loads configuration from a TOML file and merges with defaults
pub fn load_config(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path).map_err(LynceusError::IoError)?;
    let file_config: FileConfig = toml::from_str(&content)?;

    let mut config = ScanConfig::default();

    if let Some(scan) = file_config.scan {
        if let Some(timeout) = scan.timeout_secs {
            config.timeout_secs = timeout;
        }
        if let Some(path_timeout) = scan.path_timeout_secs {
            config.path_timeout_secs = path_timeout;
        }
        if let Some(ua) = scan.user_agent {
            config.user_agent = ua;
        }
        if let Some(follow) = scan.follow_redirects {
            config.follow_redirects = follow;
        }
        if let Some(dir) = scan.log_dir {
            config.log_dir = dir;
        }
    }

    let server_port = file_config.server.and_then(|s| s.port);

    Ok(Settings {
        scan: config,
        server_port,
    })
}

/// Merges CLI arguments into an existing ScanConfig
pub fn merge_cli_args(
    config: &mut ScanConfig,
    target: String,
    timeout: Option<u64>,
    log_dir: Option<String>,
    advanced: bool,
) {
    config.target = target;

    if let Some(t) = timeout {
        config.timeout_secs = t;
    }
    if let Some(dir) = log_dir {
        config.log_dir = dir;
    }
    if advanced {
        config.advanced = true;
    }
}
