//! Lynceus - Website Security Checkup Tool
//!
//! Runs a fixed set of independent, read-only probes against a target
//! website to surface common misconfigurations (missing HTTPS redirect,
//! weak TLS certificate, missing security headers, insecure cookies,
//! missing robots/sitemap, directory listing exposure, server banner
//! leakage) and aggregates them into a single timestamped report, served
//! through a minimal local web front end.

pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod probe;
pub mod report;
pub mod server;
