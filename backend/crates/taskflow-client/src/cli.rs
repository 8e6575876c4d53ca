use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "taskflow")]
#[command(about = "TaskFlow CLI - manage projects from the terminal")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (auto-discovered from server.json, or specify manually)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
