pub(crate) mod state;

pub use state::{Mode, ProjectForm, ViewState};
