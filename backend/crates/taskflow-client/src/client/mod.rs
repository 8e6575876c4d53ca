#[allow(clippy::module_inception)]
pub(crate) mod client;
pub(crate) mod error;

pub use client::ApiClient;
pub use error::{ClientError, Result as ClientResult};
