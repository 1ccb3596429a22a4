//! Cookie security flag probe

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{Details, ProbeResult, ScanConfig, Status};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Checks Secure, HttpOnly, and SameSite on cookies set by the response
pub struct CookieFlagsProbe;

/// Parses one Set-Cookie header value and returns the cookie name plus
/// the descriptions of any missing flags, in fixed order.
///
/// A `SameSite=` with an empty value counts as missing.
fn audit_cookie(set_cookie: &str) -> (String, Vec<&'static str>) {
    let mut parts = set_cookie.split(';');
    let name = parts
        .next()
        .and_then(|p| p.split('=').next())
        .unwrap_or("unknown")
        .trim()
        .to_string();

    let mut secure = false;
    let mut httponly = false;
    let mut samesite = false;

    for attr in parts {
        let attr = attr.trim();
        let (key, value) = match attr.split_once('=') {
            Some((k, v)) => (k.trim(), Some(v.trim())),
            None => (attr, None),
        };
        match key.to_ascii_lowercase().as_str() {
            "secure" => secure = true,
            "httponly" => httponly = true,
            "samesite" => samesite = value.is_some_and(|v| !v.is_empty()),
            _ => {}
        }
    }

    let mut issues = Vec::new();
    if !secure {
        issues.push("Missing Secure flag");
    }
    if !httponly {
        issues.push("Missing HttpOnly flag");
    }
    if !samesite {
        issues.push("Missing SameSite attribute");
    }

    (name, issues)
}

#[async_trait]
impl super::Probe for CookieFlagsProbe {
    fn name(&self) -> &'static str {
        super::COOKIE_FLAGS
    }

    fn description(&self) -> &str {
        "Checks cookies for missing Secure, HttpOnly, and SameSite flags"
    }

    async fn run(
        &self,
        client: &HttpClient,
        _config: &ScanConfig,
        target: &Url,
    ) -> Result<ProbeResult> {
        let response = client.get(target.as_str()).await?;

        let set_cookie_headers: Vec<String> = response
            .headers()
            .get_all("set-cookie")
            .iter()
            .filter_map(|v| v.to_str().ok().map(String::from))
            .collect();

        if set_cookie_headers.is_empty() {
            debug!("No Set-Cookie headers found");
            return Ok(ProbeResult::new(Status::Info, "No cookies found"));
        }

        let mut cookie_issues = Vec::new();
        for cookie_str in &set_cookie_headers {
            let (name, issues) = audit_cookie(cookie_str);
            if !issues.is_empty() {
                cookie_issues.push(format!("{name}: {}", issues.join(", ")));
            }
        }

        if cookie_issues.is_empty() {
            Ok(ProbeResult::new(
                Status::Good,
                "All cookies have proper security flags",
            ))
        } else {
            Ok(
                ProbeResult::new(Status::Warning, "Cookie security issues found")
                    .with_details(Details::Items(cookie_issues)),
            )
        }
    }
}
