//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::core::diagnostics::DiagnosticSink;
use crate::fetch::{FetchFailure, FetchResult, TextFetcher};

/// Resolves every call with the same result, optionally after a delay.
pub struct StaticFetcher {
    result: FetchResult,
    delay: Option<Duration>,
    calls: AtomicUsize,
    endpoints: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new(result: FetchResult) -> Self {
        Self {
            result,
            delay: None,
            calls: AtomicUsize::new(0),
            endpoints: Mutex::new(Vec::new()),
        }
    }

    pub fn ok(text: &str) -> Self {
        Self::new(Ok(text.to_string()))
    }

    pub fn err(cause: FetchFailure) -> Self {
        Self::new(Err(cause))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn endpoints(&self) -> Vec<String> {
        self.endpoints.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextFetcher for StaticFetcher {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_text(&self, endpoint: &str) -> FetchResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.endpoints.lock().unwrap().push(endpoint.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.result.clone()
    }
}

/// Stays pending until the test sends the result through the gate.
pub struct GatedFetcher {
    gate: Mutex<Option<oneshot::Receiver<FetchResult>>>,
}

impl GatedFetcher {
    pub fn pair() -> (Self, oneshot::Sender<FetchResult>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                gate: Mutex::new(Some(rx)),
            },
            tx,
        )
    }
}

#[async_trait]
impl TextFetcher for GatedFetcher {
    fn name(&self) -> &str {
        "gated"
    }

    async fn fetch_text(&self, _endpoint: &str) -> FetchResult {
        let rx = self.gate.lock().unwrap().take();
        match rx {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(FetchFailure::Network("gate dropped".to_string()))),
            None => Err(FetchFailure::Network("gated fetcher called twice".to_string())),
        }
    }
}

/// Keeps every recorded cause for assertions.
#[derive(Default)]
pub struct RecordingSink {
    entries: Mutex<Vec<FetchFailure>>,
}

impl RecordingSink {
    pub fn entries(&self) -> Vec<FetchFailure> {
        self.entries.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, cause: &FetchFailure) {
        self.entries.lock().unwrap().push(cause.clone());
    }
}
