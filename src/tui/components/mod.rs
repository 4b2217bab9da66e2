//! # TUI Components
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into `HelloView` directly. This keeps dependencies explicit and
//! components testable with `TestBackend`.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! └── hello_banner.rs  (Page header with the current text)
//! ```

mod hello_banner;
pub use hello_banner::HelloBanner;
