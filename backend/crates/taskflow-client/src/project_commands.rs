use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List all projects, newest first
    List,
    /// Create a new project
    Create {
        /// Project name
        name: String,
        /// Optional description
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a project (omitted fields keep their stored value)
    Update {
        /// Project ID (24 hex characters)
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a project. Irreversible.
    Delete {
        /// Project ID (24 hex characters)
        id: String,
    },
}
