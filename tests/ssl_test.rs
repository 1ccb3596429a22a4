//! Integration tests for the SSL certificate probe

mod common;

use common::test_config;
use lynceus::http::HttpClient;
use lynceus::models::Status;
use lynceus::probe::ssl_certificate::SslCertificateProbe;
use lynceus::probe::Probe;
use url::Url;

#[tokio::test]
async fn http_target_is_not_applicable() {
    let config = test_config("http://example.com");
    let client = HttpClient::from_config(&config).expect("Failed to create client");
    let target = Url::parse(&config.target).expect("Invalid URL");

    let result = SslCertificateProbe
        .run(&client, &config, &target)
        .await
        .expect("Probe failed");

    assert_eq!(result.status, Status::NotApplicable);
    assert_eq!(result.message, "Not using HTTPS");
    assert_eq!(
        client.request_count(),
        0,
        "scheme check must not touch the network"
    );
}

#[tokio::test]
async fn unreachable_https_target_is_a_probe_error() {
    let config = test_config("https://127.0.0.1:1");
    let client = HttpClient::from_config(&config).expect("Failed to create client");
    let target = Url::parse(&config.target).expect("Invalid URL");

    let result = SslCertificateProbe.run(&client, &config, &target).await;
    assert!(result.is_err());
}
