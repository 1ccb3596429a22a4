//! TLS certificate expiry probe

use crate::error::{LynceusError, Result};
use crate::http::HttpClient;
use crate::models::{ProbeResult, ScanConfig, Status};
use async_trait::async_trait;
use chrono::Utc;
use native_tls::TlsConnector;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;
use url::Url;
use x509_parser::parse_x509_certificate;

/// Reads the peer certificate over a validated TLS handshake and
/// classifies it by days until expiry
pub struct SslCertificateProbe;

const EXPIRY_WARNING_DAYS: i64 = 30;

/// Classifies a certificate by whole days until its notAfter date
fn classify_expiry(days: i64) -> ProbeResult {
    if days < 0 {
        ProbeResult::new(
            Status::Expired,
            format!("Certificate expired {} days ago", days.abs()),
        )
    } else if days < EXPIRY_WARNING_DAYS {
        ProbeResult::new(
            Status::ExpiringSoon,
            format!("Certificate expires in {days} days"),
        )
    } else {
        ProbeResult::new(
            Status::Valid,
            format!("Certificate valid for {days} more days"),
        )
    }
}

#[async_trait]
impl super::Probe for SslCertificateProbe {
    fn name(&self) -> &'static str {
        super::SSL_CERTIFICATE
    }

    fn description(&self) -> &str {
        "Validates the TLS certificate and reports time until expiry"
    }

    async fn run(
        &self,
        _client: &HttpClient,
        config: &ScanConfig,
        target: &Url,
    ) -> Result<ProbeResult> {
        if target.scheme() != "https" {
            return Ok(ProbeResult::new(Status::NotApplicable, "Not using HTTPS"));
        }

        let host = target
            .host_str()
            .ok_or_else(|| LynceusError::ProbeError("target URL has no host".to_string()))?;
        let port = target.port().unwrap_or(443);
        let addr = format!("{host}:{port}");

        let tcp_stream = timeout(
            Duration::from_secs(config.timeout_secs),
            TcpStream::connect(&addr),
        )
        .await
        .map_err(|_| LynceusError::Timeout(config.timeout_secs))??;

        // Standard certificate validation; an invalid chain fails the
        // handshake and surfaces as a probe error
        let connector = tokio_native_tls::TlsConnector::from(TlsConnector::new()?);
        let tls_stream = connector.connect(host, tcp_stream).await?;
        debug!("TLS handshake completed for {addr}");

        let cert = match tls_stream.get_ref().peer_certificate()? {
            Some(cert) => cert,
            None => {
                return Ok(ProbeResult::new(
                    Status::Info,
                    "Certificate information unavailable",
                ));
            }
        };

        let der = cert.to_der()?;
        let (_, parsed) =
            parse_x509_certificate(&der).map_err(|e| LynceusError::CertError(e.to_string()))?;

        let not_after = parsed.validity().not_after.timestamp();
        let days = (not_after - Utc::now().timestamp()) / 86_400;

        Ok(classify_expiry(days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_certificate_reports_days_since_expiry() {
        let result = classify_expiry(-5);
        assert_eq!(result.status, Status::Expired);
        assert_eq!(result.message, "Certificate expired 5 days ago");
    }

    #[test]
    fn certificate_inside_warning_window_is_expiring_soon() {
        let result = classify_expiry(10);
        assert_eq!(result.status, Status::ExpiringSoon);
        assert_eq!(result.message, "Certificate expires in 10 days");
    }

    #[test]
    fn long_lived_certificate_is_valid() {
        let result = classify_expiry(400);
        assert_eq!(result.status, Status::Valid);
        assert_eq!(result.message, "Certificate valid for 400 more days");
    }

    #[test]
    fn boundary_days_classify_toward_warning() {
        assert_eq!(classify_expiry(0).status, Status::ExpiringSoon);
        assert_eq!(classify_expiry(29).status, Status::ExpiringSoon);
        assert_eq!(classify_expiry(30).status, Status::Valid);
    }
}
