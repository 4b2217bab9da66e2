//! # View State
//!
//! Everything the hello view knows, in one place.
//!
//! ```text
//! HelloView
//! ├── state: ViewState      // Loading | Loaded { message } | Failed
//! ├── mounted: bool         // guard checked before applying a settlement
//! └── fetch_issued: bool    // at most one fetch per mount
//! ```
//!
//! State changes only happen through `update(view, action)` in action.rs.
//! Loading and the message live in a single enum, so "loading with a message
//! already set" cannot be expressed.

/// The one endpoint this view ever requests.
pub const HELLO_ENDPOINT: &str = "/api/hello";

/// Heading shown above the message.
pub const PAGE_HEADING: &str = "GitOps React + Java App";

pub const LOADING_TEXT: &str = "Loading...";

/// Shown for every failure, whatever the cause.
pub const FAILURE_TEXT: &str = "Error connecting to backend";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    Loaded {
        message: String,
    },
    Failed,
}

impl ViewState {
    /// The text rendered for this state.
    pub fn text(&self) -> &str {
        match self {
            ViewState::Loading => LOADING_TEXT,
            ViewState::Loaded { message } => message,
            ViewState::Failed => FAILURE_TEXT,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, ViewState::Loading)
    }
}

#[derive(Debug, Default)]
pub struct HelloView {
    pub(crate) state: ViewState,
    pub(crate) mounted: bool,
    pub(crate) fetch_issued: bool,
}

impl HelloView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Pure render: the current state's text, no side effects.
    pub fn render(&self) -> &str {
        self.state.text()
    }
}
