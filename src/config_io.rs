//! Locating and loading the configuration file

use crate::config::{Config, ConfigError};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "command-center";
const CONFIG_FILE: &str = "config.json";

/// Directory paths the program reads configuration from
///
/// Only `main` should build this from the system; everything else receives
/// it as a parameter so tests can point it at a temp directory.
#[derive(Debug, Clone)]
pub struct DirectoryContext {
    /// e.g. ~/.config/command-center on Linux
    pub config_dir: PathBuf,
}

impl DirectoryContext {
    /// Create a DirectoryContext from the system directories
    pub fn from_system() -> std::io::Result<Self> {
        #[allow(unused_mut)] // mut needed on macOS only
        let mut config_dir = dirs::config_dir()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Could not determine config directory",
                )
            })?
            .join(APP_DIR);

        // macOS: Prioritize ~/.config/command-center
        #[cfg(target_os = "macos")]
        if let Some(home) = dirs::home_dir() {
            config_dir = home.join(".config").join(APP_DIR);
        }

        Ok(Self { config_dir })
    }

    /// Create a DirectoryContext for testing with a temp directory
    pub fn for_testing(temp_dir: &Path) -> Self {
        Self {
            config_dir: temp_dir.join("config"),
        }
    }

    pub fn user_config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }
}

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Explicit(PathBuf),
    User(PathBuf),
    Defaults,
}

/// Load the configuration.
///
/// An explicit path must exist and parse. Without one, the user file is
/// used when present; otherwise built-in defaults apply.
pub fn load_config(
    explicit: Option<&Path>,
    dirs: &DirectoryContext,
) -> Result<(Config, ConfigSource), ConfigError> {
    if let Some(path) = explicit {
        let config = Config::load_from_file(path)?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
    }

    let user_path = dirs.user_config_path();
    if user_path.exists() {
        let config = Config::load_from_file(&user_path)?;
        tracing::info!("Loaded user config from {}", user_path.display());
        return Ok((config, ConfigSource::User(user_path)));
    }

    tracing::debug!("No config at {}, using defaults", user_path.display());
    Ok((Config::default(), ConfigSource::Defaults))
}
