//! # Actions
//!
//! Everything that can happen to the view becomes an `Action`.
//! The view appears? That's `Action::Mount`.
//! The backend answers? That's `Action::FetchSettled(result)`.
//!
//! The `update()` function applies an action to the view and returns the
//! `Effect` the adapter has to carry out. No I/O happens here.
//!
//! ```text
//! HelloView + Action  →  update()  →  HelloView' + Effect
//! ```

use log::{debug, info};

use crate::core::state::{HELLO_ENDPOINT, HelloView, ViewState};
use crate::fetch::{FetchFailure, FetchResult};

#[derive(Debug)]
pub enum Action {
    Mount,
    FetchSettled(FetchResult),
    Unmount,
}

/// Side effect requested by `update`, executed by the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnFetch { endpoint: &'static str },
    Redraw,
    /// State is already `Failed`; the cause goes to the diagnostic sink.
    ReportFailure(FetchFailure),
}

pub fn update(view: &mut HelloView, action: Action) -> Effect {
    match action {
        Action::Mount => {
            view.mounted = true;
            if view.fetch_issued {
                debug!("Mount ignored: fetch already issued");
                return Effect::None;
            }
            view.fetch_issued = true;
            info!("Mounted, requesting {}", HELLO_ENDPOINT);
            Effect::SpawnFetch {
                endpoint: HELLO_ENDPOINT,
            }
        }
        Action::FetchSettled(result) => {
            if !view.mounted {
                debug!("Settlement after unmount dropped");
                return Effect::None;
            }
            if !view.fetch_issued || view.state.is_settled() {
                debug!("Duplicate settlement ignored");
                return Effect::None;
            }
            match result {
                Ok(message) => {
                    info!("Loaded {} bytes", message.len());
                    view.state = ViewState::Loaded { message };
                    Effect::Redraw
                }
                Err(cause) => {
                    view.state = ViewState::Failed;
                    Effect::ReportFailure(cause)
                }
            }
        }
        Action::Unmount => {
            view.mounted = false;
            debug!("Unmounted");
            Effect::None
        }
    }
}
