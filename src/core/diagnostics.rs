//! Where fetch failure causes go. They are never rendered.

use log::error;

use crate::fetch::FetchFailure;

pub trait DiagnosticSink: Send + Sync {
    /// Records a failure cause. Must not panic; the view has already moved
    /// to `Failed` by the time this runs.
    fn record(&self, cause: &FetchFailure);
}

/// Writes causes to the application log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn record(&self, cause: &FetchFailure) {
        error!("Error: {}", cause);
    }
}
