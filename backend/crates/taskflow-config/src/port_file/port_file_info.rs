//! Port discovery file.
//!
//! The server writes `<config_dir>/server.json` after binding; the client
//! reads it to discover the server URL without a --server flag.
//!
//! If the server crashes without cleanup the file goes stale. `read_live`
//! checks whether the recorded PID is still running and removes the file
//! if it is not. `write` refuses to overwrite a live server's file.

use crate::{Config, ConfigError, ConfigErrorResult, port_file::is_process_running};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const PORT_FILENAME: &str = "server.json";

/// Information stored in the port discovery file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortFileInfo {
    /// Process ID of the server that wrote this file
    pub pid: u32,
    /// Port the server is listening on
    pub port: u16,
    /// Host the server is bound to
    pub host: String,
    /// ISO 8601 timestamp when the server started
    pub started_at: String,
    /// Server version for diagnostics
    pub version: String,
}

impl PortFileInfo {
    /// Write the port discovery file to the active config directory.
    /// Called by the server after `TcpListener::bind()` succeeds.
    pub fn write(port: u16, host: &str) -> ConfigErrorResult<PathBuf> {
        Self::write_in(&Config::config_dir()?, port, host)
    }

    /// Write to a specific config directory.
    ///
    /// Refuses to overwrite the file of a still-running server. There is
    /// a small TOCTOU window between that check and the write, acceptable
    /// for a local development tool.
    pub fn write_in(config_dir: &Path, port: u16, host: &str) -> ConfigErrorResult<PathBuf> {
        let path = config_dir.join(PORT_FILENAME);

        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        if let Ok(Some(existing)) = Self::read_live_in(config_dir) {
            return Err(ConfigError::config(format!(
                "Another taskflow-server is already running on port {} (PID {}). \
                 Stop it first or use a different config directory.",
                existing.port, existing.pid
            )));
        }

        let info = PortFileInfo {
            pid: std::process::id(),
            port,
            host: host.to_string(),
            started_at: chrono::Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        };

        let content = serde_json::to_string_pretty(&info)
            .map_err(|e| ConfigError::config(format!("Failed to serialize port file: {e}")))?;

        std::fs::write(&path, content).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        Ok(path)
    }

    /// Read the port discovery file from the active config directory.
    /// Returns `Ok(None)` if the file does not exist.
    pub fn read() -> ConfigErrorResult<Option<PortFileInfo>> {
        Self::read_in(&Config::config_dir()?)
    }

    /// Read from a specific config directory.
    pub fn read_in(config_dir: &Path) -> ConfigErrorResult<Option<PortFileInfo>> {
        let path = config_dir.join(PORT_FILENAME);

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        let info: PortFileInfo = serde_json::from_str(&content).map_err(|e| {
            ConfigError::config(format!("Invalid port file {}: {e}", path.display()))
        })?;

        Ok(Some(info))
    }

    /// Read the port file and verify the server process is still alive.
    ///
    /// Returns `Ok(None)` when the file is missing or when the recorded
    /// PID is no longer running (the stale file is removed). This is the
    /// method the client should use.
    pub fn read_live() -> ConfigErrorResult<Option<PortFileInfo>> {
        Self::read_live_in(&Config::config_dir()?)
    }

    /// Liveness-checked read from a specific config directory.
    pub fn read_live_in(config_dir: &Path) -> ConfigErrorResult<Option<PortFileInfo>> {
        let info = match Self::read_in(config_dir)? {
            Some(info) => info,
            None => return Ok(None),
        };

        if is_process_running(info.pid) {
            Ok(Some(info))
        } else {
            log::debug!(
                "Removing stale port file (pid {} no longer running)",
                info.pid
            );
            let _ = Self::remove_in(config_dir); // Best-effort cleanup
            Ok(None)
        }
    }

    /// Delete the port discovery file. Called by the server on graceful
    /// shutdown; silently succeeds if the file does not exist.
    pub fn remove() -> ConfigErrorResult<()> {
        Self::remove_in(&Config::config_dir()?)
    }

    /// Remove from a specific config directory.
    pub fn remove_in(config_dir: &Path) -> ConfigErrorResult<()> {
        let path = config_dir.join(PORT_FILENAME);
        if path.exists() {
            std::fs::remove_file(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
        }
        Ok(())
    }
}
