//! taskflow - TaskFlow CLI
//!
//! A terminal client for the TaskFlow project API.
//!
//! # Examples
//!
//! ```bash
//! # List all projects
//! taskflow project list --pretty
//!
//! # Create a project
//! taskflow project create "Alpha" --description "first"
//!
//! # Interactive form+list view
//! taskflow board
//! ```

mod board;
mod cli;
mod client;
mod commands;
mod models;
mod project_commands;
mod view;

use crate::cli::Cli;
use crate::client::{ApiClient, ClientError, ClientResult};
use crate::commands::Commands;
use crate::project_commands::ProjectCommands;

use std::process::ExitCode;

use clap::Parser;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Discover server URL: explicit flag > port file > default
    let server_url = match cli.server {
        Some(url) => url,
        None => discover_server_url(),
    };

    let client = ApiClient::new(&server_url);

    let result = run(&client, cli.command, cli.pretty).await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &ApiClient, command: Commands, pretty: bool) -> ClientResult<()> {
    match command {
        Commands::Board => board::run(client).await,

        Commands::Project { action } => match action {
            ProjectCommands::List => {
                let projects = client.list_projects().await?;
                print_json(&projects, pretty)
            }
            ProjectCommands::Create { name, description } => {
                let project = client
                    .create_project(&name, description.as_deref())
                    .await?;
                print_json(&project, pretty)
            }
            ProjectCommands::Update {
                id,
                name,
                description,
            } => {
                let project = client
                    .update_project(&id, name.as_deref(), description.as_deref())
                    .await?;
                print_json(&project, pretty)
            }
            ProjectCommands::Delete { id } => {
                let message = client.delete_project(&id).await?;
                println!("{}", message);
                Ok(())
            }
        },
    }
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> ClientResult<()> {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(ClientError::from_json)?;

    println!("{}", output);
    Ok(())
}

/// Read the server's port discovery file; fall back to the default URL.
fn discover_server_url() -> String {
    match taskflow_config::PortFileInfo::read_live() {
        Ok(Some(info)) => format!("http://{}:{}", info.host, info.port),
        _ => DEFAULT_SERVER_URL.to_string(),
    }
}
