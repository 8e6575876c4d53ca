//! taskflow-client library
//!
//! Exports the HTTP client and the view state machine for use in tests
//! and other crates.

pub(crate) mod board;
pub(crate) mod cli;
pub(crate) mod client;
pub(crate) mod commands;
pub(crate) mod models;
pub(crate) mod project_commands;
pub(crate) mod view;

#[cfg(test)]
mod tests;

pub use client::{ApiClient, ClientError, ClientResult};
pub use models::Project;
pub use view::{Mode, ProjectForm, ViewState};
