
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Point TASKFLOW_CONFIG_DIR at a fresh temp directory.
/// Returns both guards; config dir lives until the TempDir drops.
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let guard = EnvGuard::set(
        "TASKFLOW_CONFIG_DIR",
        temp.path().to_str().expect("temp path not utf-8"),
    );
    (temp, guard)
}
