//! Error types for Lynceus

use thiserror::Error;

/// Main error type for Lynceus operations
#[derive(Debug, Error)]
pub enum LynceusError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("TLS error: {0}")]
    TlsError(#[from] native_tls::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Probe error: {0}")]
    ProbeError(String),

    #[error("Certificate parse error: {0}")]
    CertError(String),

    #[error("Connection timed out after {0} seconds")]
    Timeout(u64),
}

/// Result type alias for Lynceus operations
pub type Result<T> = std::result::Result<T, LynceusError>;
