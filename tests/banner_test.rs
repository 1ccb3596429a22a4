//! Integration tests for the server banner probe

mod common;

use common::test_config;
use lynceus::http::HttpClient;
use lynceus::models::Status;
use lynceus::probe::server_banner::ServerBannerProbe;
use lynceus::probe::Probe;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

/// Spawns a raw TCP responder that answers every connection with a canned
/// HTTP response, returning the http:// URL to reach it
async fn spawn_raw_server(response: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response.as_bytes()).await;
            });
        }
    });

    format!("http://{addr}")
}

async fn probe_target(target_url: &str) -> lynceus::models::ProbeResult {
    let config = test_config(target_url);
    let client = HttpClient::from_config(&config).expect("Failed to create client");
    let target = Url::parse(target_url).expect("Invalid URL");

    ServerBannerProbe
        .run(&client, &config, &target)
        .await
        .expect("Probe failed")
}

#[tokio::test]
async fn banner_is_extracted_from_the_server_header() {
    let target = spawn_raw_server(
        "HTTP/1.1 200 OK\r\nServer: TestServer/1.0\r\nContent-Length: 0\r\n\r\n",
    )
    .await;

    let result = probe_target(&target).await;
    assert_eq!(result.status, Status::Info);
    assert_eq!(result.message, "Server identified: TestServer/1.0");
}

#[tokio::test]
async fn missing_server_header_is_reported() {
    let target =
        spawn_raw_server("HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n").await;

    let result = probe_target(&target).await;
    assert_eq!(result.status, Status::Info);
    assert_eq!(result.message, "No server banner found");
}

#[tokio::test]
async fn refused_connection_is_a_probe_error() {
    let config = test_config("http://127.0.0.1:1");
    let client = HttpClient::from_config(&config).expect("Failed to create client");
    let target = Url::parse(&config.target).expect("Invalid URL");

    let result = ServerBannerProbe.run(&client, &config, &target).await;
    assert!(result.is_err());
}
