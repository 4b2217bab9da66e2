//! HTTP-backed `TextFetcher` using reqwest.
//!
//! The body is handed back untouched. `/api/hello` answers with plain text,
//! so there is no JSON decoding here even when the payload happens to look
//! like JSON.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::fetch::{FetchFailure, FetchResult, TextFetcher};

pub struct HttpFetcher {
    base_url: String,
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Joins the base URL and an absolute endpoint path without doubling `/`.
    fn url_for(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl TextFetcher for HttpFetcher {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_text(&self, endpoint: &str) -> FetchResult {
        let url = self.url_for(endpoint);
        info!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchFailure::Network(e.to_string()))?;

        debug!("Backend response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("Backend error: {} for {}", status, url);
            return Err(FetchFailure::Status { status });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchFailure::Body(e.to_string()))?;

        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_without_double_slash() {
        let fetcher = HttpFetcher::new("http://localhost:8080/");
        assert_eq!(
            fetcher.url_for("/api/hello"),
            "http://localhost:8080/api/hello"
        );
    }

    #[test]
    fn test_url_for_keeps_base_path() {
        let fetcher = HttpFetcher::new("https://example.com/app");
        assert_eq!(
            fetcher.url_for("/api/hello"),
            "https://example.com/app/api/hello"
        );
    }
}
