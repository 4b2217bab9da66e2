use std::fmt;

use async_trait::async_trait;

/// Why a fetch failed. Only ever written to the diagnostic sink; the view
/// shows the same fixed message for every variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// Transport-level failure (connection refused, DNS, timeout, reset).
    Network(String),
    /// The backend answered with a non-2xx status.
    Status { status: u16 },
    /// The response body could not be read as text.
    Body(String),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Network(msg) => write!(f, "network error: {msg}"),
            FetchFailure::Status { status } => write!(f, "backend returned HTTP {status}"),
            FetchFailure::Body(msg) => write!(f, "failed to read response body: {msg}"),
        }
    }
}

impl std::error::Error for FetchFailure {}

/// Outcome of a single text fetch.
pub type FetchResult = Result<String, FetchFailure>;

/// Performs one outbound request and resolves with the response text.
#[async_trait]
pub trait TextFetcher: Send + Sync {
    /// Returns the name of the fetcher, for logging.
    fn name(&self) -> &str;

    /// Fetches `endpoint` and returns its body as opaque text.
    async fn fetch_text(&self, endpoint: &str) -> FetchResult;
}
