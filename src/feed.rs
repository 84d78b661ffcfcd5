// File: ./src/feed.rs
// Fetches the remote and imported event feeds: plain GETs returning a
// JSON array of loosely-typed records. Callers normalize the result.
use crate::model::RawEvent;
use anyhow::{Context, Result};
use std::time::Duration;

const FEED_TIMEOUT_SECS: u64 = 15;

fn client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(FEED_TIMEOUT_SECS))
        .user_agent(concat!("freebites/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")
}

/// Fetches a feed URL and parses it as a raw event array.
///
/// Non-2xx responses and non-array bodies are errors here; the caller
/// decides whether that is fatal (startup load falls back to an empty
/// remote set, import surfaces a transient message).
pub async fn fetch_events(url: &str) -> Result<Vec<RawEvent>> {
    let response = client()?
        .get(url)
        .send()
        .await
        .with_context(|| format!("Feed request failed: {}", url))?
        .error_for_status()
        .with_context(|| format!("Feed returned an error status: {}", url))?;

    let value: serde_json::Value = response
        .json()
        .await
        .with_context(|| format!("Feed is not valid JSON: {}", url))?;

    match value {
        serde_json::Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|v| serde_json::from_value::<RawEvent>(v).ok())
            .collect()),
        _ => anyhow::bail!("Feed is not a JSON array: {}", url),
    }
}
