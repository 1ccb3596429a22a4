//! HTTP client module for Lynceus

pub mod client;
pub use client::HttpClient;
