pub mod error;
pub mod models;


pub use error::{CoreError, Result};
pub use models::project::Project;
pub use models::project_id::ProjectId;
