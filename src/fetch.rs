//! Source list retrieval.

use std::time::Duration;

use crate::{Error, Result};

/// Default download timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Something that can turn a source URL into text.
///
/// The converter only needs this one operation, which keeps the network out
/// of tests.
pub trait SourceFetcher {
    /// Fetch the decoded text behind `url`.
    fn fetch_text(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP fetcher. One attempt per URL, no retries.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a fetcher with a custom request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;
        Ok(Self { client })
    }
}

impl SourceFetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes()?;
        Ok(decode_text(&body))
    }
}

/// Decode a downloaded body as UTF-8, falling back to Latin-1.
///
/// The fallback maps every byte to the code point of the same value, so it
/// cannot fail.
pub fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}
