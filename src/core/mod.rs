//! # Core View Logic
//!
//! The hello view's state and its reducer.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • HelloView (state)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   Plain    │
//!             │  Adapter   │          │  Adapter   │
//!             │ (ratatui)  │          │  (stdout)  │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `HelloView` and `ViewState`
//! - [`action`]: The `Action` enum and `update()`
//! - [`diagnostics`]: Where failure causes are recorded
//! - [`config`]: Backend origin resolution

pub mod action;
pub mod config;
pub mod diagnostics;
pub mod state;
