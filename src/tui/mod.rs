//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the `HelloView`, renders it, and runs
//! the one fetch on a background task.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! ```text
//! Mount ──► spawn fetch task ──► (mpsc) ──► FetchSettled ──► update() ──► draw
//!                                  ▲
//!                 quit: Unmount + drop receiver; a late send just fails
//! ```
//!
//! While the view is loading the loop polls terminal events every 50ms so
//! the settlement is drawn promptly. Once settled it sleeps up to 500ms and
//! only redraws on resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use ratatui::Terminal;
use ratatui::backend::Backend;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::diagnostics::{DiagnosticSink, LogSink};
use crate::core::state::HelloView;
use crate::fetch::{FetchFailure, HttpFetcher, TextFetcher};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const LOADING_POLL: Duration = Duration::from_millis(50);
const IDLE_POLL: Duration = Duration::from_millis(500);

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let fetcher: Arc<dyn TextFetcher> = Arc::new(HttpFetcher::new(config.base_url.clone()));
    info!("Using {} fetcher against {}", fetcher.name(), config.base_url);
    run_with(fetcher, Arc::new(LogSink))
}

pub fn run_with(
    fetcher: Arc<dyn TextFetcher>,
    sink: Arc<dyn DiagnosticSink>,
) -> std::io::Result<()> {
    let mut view = HelloView::new();
    let mut terminal = ratatui::init();

    // Channel for actions from the fetch task
    let (tx, rx) = mpsc::channel();

    if let Effect::SpawnFetch { endpoint } = update(&mut view, Action::Mount) {
        spawn_fetch(fetcher, endpoint, tx);
    }

    let mut needs_redraw = true; // Force first frame

    let result = loop {
        // Apply the settlement, if it arrived
        let mut reports = Vec::new();
        while let Ok(action) = rx.try_recv() {
            debug!("Event loop received: {:?}", action);
            match update(&mut view, action) {
                Effect::Redraw => needs_redraw = true,
                Effect::ReportFailure(cause) => {
                    needs_redraw = true;
                    reports.push(cause);
                }
                Effect::None | Effect::SpawnFetch { .. } => {}
            }
        }

        if needs_redraw {
            if let Err(e) = draw_and_report(&mut terminal, &view, reports, sink.as_ref()) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let timeout = if view.state().is_settled() {
            IDLE_POLL
        } else {
            LOADING_POLL
        };
        let first_event = poll_event_timeout(timeout);

        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Quit => should_quit = true,
                TuiEvent::Resize => needs_redraw = true,
            }
        }

        if should_quit {
            break Ok(());
        }
    };

    update(&mut view, Action::Unmount);
    drop(rx);

    ratatui::restore();
    result
}

/// Draws the current state, then hands failure causes to the sink.
fn draw_and_report<B: Backend>(
    terminal: &mut Terminal<B>,
    view: &HelloView,
    reports: Vec<FetchFailure>,
    sink: &dyn DiagnosticSink,
) -> Result<(), B::Error> {
    terminal.draw(|f| ui::draw_ui(f, view))?;
    for cause in &reports {
        sink.record(cause);
    }
    Ok(())
}

fn spawn_fetch(fetcher: Arc<dyn TextFetcher>, endpoint: &'static str, tx: mpsc::Sender<Action>) {
    info!("Spawning fetch for {}", endpoint);
    tokio::spawn(async move {
        let result = fetcher.fetch_text(endpoint).await;
        if tx.send(Action::FetchSettled(result)).is_err() {
            debug!("View unmounted before {} settled, result dropped", endpoint);
        }
    });
}
