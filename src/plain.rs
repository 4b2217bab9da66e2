//! # Plain Adapter
//!
//! Runs the view lifecycle without a terminal UI, writing one line per
//! rendered state. Handy for scripts and for checking a backend from CI.

use std::io::Write;

use log::{info, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::diagnostics::{DiagnosticSink, LogSink};
use crate::core::state::{HelloView, ViewState};
use crate::fetch::{HttpFetcher, TextFetcher};

/// Mounts `view`, awaits the single fetch and applies its settlement.
///
/// `render` is called once with the initial state and once more when the
/// settlement changes it. The failure cause goes to `sink` after the
/// `Failed` state has been rendered.
pub async fn drive<F>(
    view: &mut HelloView,
    fetcher: &dyn TextFetcher,
    sink: &dyn DiagnosticSink,
    mut render: F,
) where
    F: FnMut(&ViewState),
{
    let effect = update(view, Action::Mount);
    render(view.state());

    let Effect::SpawnFetch { endpoint } = effect else {
        return;
    };

    info!("Fetching {} via {}", endpoint, fetcher.name());
    let result = fetcher.fetch_text(endpoint).await;

    match update(view, Action::FetchSettled(result)) {
        Effect::Redraw => render(view.state()),
        Effect::ReportFailure(cause) => {
            render(view.state());
            sink.record(&cause);
        }
        Effect::None | Effect::SpawnFetch { .. } => {}
    }
}

pub async fn run(config: &ResolvedConfig) -> std::io::Result<()> {
    let fetcher = HttpFetcher::new(config.base_url.clone());
    run_with(&fetcher, &LogSink, &mut std::io::stdout()).await
}

/// Same as [`run`] with an injected fetcher, sink and output.
pub async fn run_with<W: Write>(
    fetcher: &dyn TextFetcher,
    sink: &dyn DiagnosticSink,
    out: &mut W,
) -> std::io::Result<()> {
    let mut view = HelloView::new();
    let mut write_error = None;

    drive(&mut view, fetcher, sink, |state| {
        if write_error.is_none()
            && let Err(e) = writeln!(out, "{}", state.text())
        {
            write_error = Some(e);
        }
    })
    .await;

    update(&mut view, Action::Unmount);

    match write_error {
        Some(e) => {
            warn!("Failed to write output: {}", e);
            Err(e)
        }
        None => out.flush(),
    }
}
