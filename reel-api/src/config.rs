//! API configuration
//!
//! The listening address and the store location. Both are fixed: the port
//! is constant and the store file sits beside the executable. Nothing is
//! read from the environment.

use anyhow::{Context, anyhow};
use std::path::PathBuf;

/// Address the API listens on
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Store file name, resolved next to the executable
pub const DEFAULT_DATABASE_FILE: &str = "moviesData.db";

#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address to bind (e.g., "0.0.0.0:3000")
    pub bind_addr: String,

    /// Path of the SQLite store file. Must already exist.
    pub database_path: PathBuf,
}

impl Config {
    pub fn new(bind_addr: impl Into<String>, database_path: impl Into<PathBuf>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            database_path: database_path.into(),
        }
    }

    /// The fixed production configuration
    ///
    /// Fails only when the executable's own location cannot be resolved.
    pub fn fixed() -> anyhow::Result<Self> {
        Ok(Self::new(DEFAULT_BIND_ADDR, default_database_path()?))
    }
}

/// `moviesData.db` in the directory holding the running executable
pub fn default_database_path() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let dir = exe
        .parent()
        .ok_or_else(|| anyhow!("Executable path {} has no parent", exe.display()))?;

    Ok(dir.join(DEFAULT_DATABASE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_database_path_sits_beside_executable() {
        let path = default_database_path().unwrap();
        let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();

        assert_eq!(path.file_name().unwrap(), DEFAULT_DATABASE_FILE);
        assert_eq!(path.parent().unwrap(), exe_dir);
    }

    #[test]
    fn test_fixed_config_ignores_environment() {
        // SAFETY: no test in this crate reads these variables
        unsafe {
            std::env::set_var("REEL_BIND_ADDR", "9.9.9.9:1");
            std::env::set_var("REEL_DATABASE_PATH", "/elsewhere/movies.db");
        }

        let config = Config::fixed().unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert_eq!(config.database_path, default_database_path().unwrap());
    }

    #[test]
    fn test_new_config() {
        let config = Config::new("127.0.0.1:4000", "/tmp/movies.db");
        assert_eq!(config.bind_addr, "127.0.0.1:4000");
        assert_eq!(config.database_path, PathBuf::from("/tmp/movies.db"));
    }
}
