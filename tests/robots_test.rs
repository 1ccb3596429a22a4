//! Integration tests for the robots.txt and sitemap probe

mod common;

use common::test_config;
use lynceus::http::HttpClient;
use lynceus::models::{Details, RobotsDetails, Status};
use lynceus::probe::robots::RobotsProbe;
use lynceus::probe::Probe;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn probe_against(mock_server: &MockServer) -> lynceus::models::ProbeResult {
    let config = test_config(&mock_server.uri());
    let client = HttpClient::from_config(&config).expect("Failed to create client");
    let target = Url::parse(&config.target).expect("Invalid URL");

    RobotsProbe
        .run(&client, &config, &target)
        .await
        .expect("Probe failed")
}

#[tokio::test]
async fn robots_with_sitemap_reference_and_sitemap_file() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("User-agent: *\nDisallow: /admin\nSitemap: /sitemap.xml\n"),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sitemap.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<urlset/>"))
        .mount(&mock_server)
        .await;

    let result = probe_against(&mock_server).await;
    assert_eq!(result.status, Status::Info);
    assert_eq!(result.message, "Robots.txt and sitemap check complete");
    assert_eq!(
        result.details,
        Some(Details::Robots(RobotsDetails {
            robots_txt: "Found".to_string(),
            sitemap_in_robots: true,
            sitemap_xml: "Found".to_string(),
        }))
    );
}

#[tokio::test]
async fn sitemap_reference_match_is_case_insensitive() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("SITEMAP: /sitemap.xml"))
        .mount(&mock_server)
        .await;

    let result = probe_against(&mock_server).await;
    match result.details {
        Some(Details::Robots(details)) => {
            assert!(details.sitemap_in_robots);
            assert_eq!(details.sitemap_xml, "Not found");
        }
        other => panic!("Expected robots details, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_robots_and_sitemap_still_reports_info() {
    let mock_server = MockServer::start().await;
    // No mounted mocks: everything 404s

    let result = probe_against(&mock_server).await;
    assert_eq!(result.status, Status::Info);
    assert_eq!(
        result.details,
        Some(Details::Robots(RobotsDetails {
            robots_txt: "Not found".to_string(),
            sitemap_in_robots: false,
            sitemap_xml: "Not found".to_string(),
        }))
    );
}

#[tokio::test]
async fn sitemap_index_is_probed_as_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sitemap_index.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<sitemapindex/>"))
        .mount(&mock_server)
        .await;

    let result = probe_against(&mock_server).await;
    match result.details {
        Some(Details::Robots(details)) => {
            assert_eq!(details.robots_txt, "Not found");
            assert_eq!(details.sitemap_xml, "Found");
        }
        other => panic!("Expected robots details, got {other:?}"),
    }
}
