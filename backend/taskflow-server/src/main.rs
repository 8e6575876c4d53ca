pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    projects::{
        create_project_request::CreateProjectRequest,
        project_dto::ProjectDto,
        projects::{create_project, delete_project, list_projects, update_project},
        update_project_request::UpdateProjectRequest,
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;

use std::error::Error;

use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load .env if present, then configuration
    let _ = dotenvy::dotenv();
    let config = taskflow_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = taskflow_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting taskflow-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/taskflow-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    // Build router
    let app = build_router(AppState { pool });

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Write port discovery file for client auto-discovery
    match taskflow_config::PortFileInfo::write(actual_addr.port(), &config.server.host) {
        Ok(path) => info!("Port file written: {}", path.display()),
        Err(e) => warn!(
            "Failed to write port file (client auto-discovery may not work): {}",
            e
        ),
    }

    // Start server with graceful shutdown on ctrl-c
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    // Clean up port discovery file
    if let Err(e) = taskflow_config::PortFileInfo::remove() {
        warn!("Failed to remove port file: {}", e);
    }

    info!("Graceful shutdown complete");

    Ok(())
}
