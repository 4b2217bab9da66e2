//! hello-view: fetch one greeting from the backend and show it.

pub mod core;
pub mod fetch;
pub mod plain;
pub mod tui;

#[cfg(test)]
pub mod test_support;
