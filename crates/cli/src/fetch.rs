// File: crates/cli/src/fetch.rs
// Summary: Dataset sources (HTTP(S) URL or local file) and the blocking fetch.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info};
use scatter_core::Dataset;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    /// A local file wins over a URL; the published dataset is the fallback.
    pub fn select(input: Option<PathBuf>, url: Option<String>, default_url: &str) -> Self {
        match (input, url) {
            (Some(path), _) => Self::File(path),
            (None, Some(url)) => Self::Url(url),
            (None, None) => Self::Url(default_url.to_string()),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Load and decode the dataset; malformed records are skipped by the decoder.
pub fn load(source: &Source, timeout: Duration) -> Result<Dataset> {
    info!(target: "fetch", "loading dataset from {}", source);
    let dataset = match source {
        Source::File(path) => {
            Dataset::load(path).with_context(|| format!("failed to load dataset '{}'", path.display()))?
        }
        Source::Url(url) => {
            let body = fetch_text(url, timeout)?;
            Dataset::from_json_str(&body).with_context(|| format!("failed to decode dataset from {url}"))?
        }
    };
    info!(
        target: "fetch",
        "loaded {} record(s), skipped {}",
        dataset.records.len(),
        dataset.skipped.len()
    );
    Ok(dataset)
}

fn fetch_text(url: &str, timeout: Duration) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .context("failed to build HTTP client")?;
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("request to {url} failed"))?
        .error_for_status()
        .with_context(|| format!("{url} returned an error status"))?;
    debug!(target: "fetch", "{} -> {}", url, response.status());
    response.text().with_context(|| format!("failed to read response body from {url}"))
}
