//! Server banner grabbing probe

use crate::error::{LynceusError, Result};
use crate::http::HttpClient;
use crate::models::{ProbeResult, ScanConfig, Status};
use async_trait::async_trait;
use native_tls::TlsConnector;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use url::Url;

/// Grabs the Server header from a raw HTTP exchange
pub struct ServerBannerProbe;

/// Upper bound on the raw response read
const BANNER_READ_LIMIT: usize = 4096;

/// Extracts the Server header value from a raw HTTP response
fn extract_server_banner(raw: &str) -> Option<String> {
    raw.lines().find_map(|line| {
        if line.to_ascii_lowercase().starts_with("server:") {
            line.split_once(':').map(|(_, rest)| rest.trim().to_string())
        } else {
            None
        }
    })
}

/// Sends a minimal GET over a fresh socket and returns the raw response,
/// decoded permissively. The socket closes when the stream drops.
async fn fetch_raw_response(
    host: &str,
    port: u16,
    use_tls: bool,
    timeout_secs: u64,
) -> Result<String> {
    let wait = Duration::from_secs(timeout_secs);
    let request = format!("GET / HTTP/1.1\r\nHost: {host}\r\n\r\n");
    let mut buf = vec![0u8; BANNER_READ_LIMIT];

    let stream = timeout(wait, TcpStream::connect(format!("{host}:{port}")))
        .await
        .map_err(|_| LynceusError::Timeout(timeout_secs))??;

    let read = if use_tls {
        let connector = tokio_native_tls::TlsConnector::from(TlsConnector::new()?);
        let mut tls_stream = connector.connect(host, stream).await?;
        tls_stream.write_all(request.as_bytes()).await?;
        timeout(wait, tls_stream.read(&mut buf))
            .await
            .map_err(|_| LynceusError::Timeout(timeout_secs))??
    } else {
        let mut stream = stream;
        stream.write_all(request.as_bytes()).await?;
        timeout(wait, stream.read(&mut buf))
            .await
            .map_err(|_| LynceusError::Timeout(timeout_secs))??
    };

    Ok(String::from_utf8_lossy(&buf[..read]).into_owned())
}

#[async_trait]
impl super::Probe for ServerBannerProbe {
    fn name(&self) -> &'static str {
        super::SERVER_BANNER
    }

    fn description(&self) -> &str {
        "Reads the Server response header from a raw HTTP exchange"
    }

    async fn run(
        &self,
        _client: &HttpClient,
        config: &ScanConfig,
        target: &Url,
    ) -> Result<ProbeResult> {
        let host = target
            .host_str()
            .ok_or_else(|| LynceusError::ProbeError("target URL has no host".to_string()))?;
        let use_tls = target.scheme() == "https";
        let port = target
            .port_or_known_default()
            .unwrap_or(if use_tls { 443 } else { 80 });

        let raw = fetch_raw_response(host, port, use_tls, config.timeout_secs).await?;

        match extract_server_banner(&raw) {
            Some(banner) => Ok(ProbeResult::new(
                Status::Info,
                format!("Server identified: {banner}"),
            )),
            None => Ok(ProbeResult::new(Status::Info, "No server banner found")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_extracted_case_insensitively() {
        let raw = "HTTP/1.1 200 OK\r\nDate: now\r\nSERVER: nginx/1.24.0\r\n\r\n";
        assert_eq!(extract_server_banner(raw), Some("nginx/1.24.0".to_string()));
    }

    #[test]
    fn missing_server_header_yields_none() {
        let raw = "HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n";
        assert_eq!(extract_server_banner(raw), None);
    }

    #[test]
    fn banner_value_keeps_internal_colons() {
        let raw = "HTTP/1.1 200 OK\r\nServer: Custom: Edition 2\r\n\r\n";
        assert_eq!(
            extract_server_banner(raw),
            Some("Custom: Edition 2".to_string())
        );
    }
}
