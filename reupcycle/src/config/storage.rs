use std::fs;
use std::path::{Path, PathBuf};

use super::errors::ConfigError;
use super::model::AppConfig;

/// Status describing how the configuration was loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading the configuration from disk.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    config: AppConfig,
    status: ConfigLoadStatus,
}

impl ConfigLoad {
    pub(crate) fn new(config: AppConfig, status: ConfigLoadStatus) -> Self {
        Self { config, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (AppConfig, ConfigLoadStatus) {
        (self.config, self.status)
    }
}

/// Load the configuration from `path`, or from the default location.
///
/// Never fails: unreadable or invalid files fall back to defaults and are
/// logged.
pub(crate) fn load_initial_config(path: Option<&Path>) -> AppConfig {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
    match load_config_from_path(&path) {
        Ok(load) => {
            let (config, status) = load.into_parts();
            match status {
                ConfigLoadStatus::Loaded => {
                    log::info!("config loaded from {}", path.display());
                },
                ConfigLoadStatus::Missing => {
                    log::debug!(
                        "no config at {}, using defaults",
                        path.display()
                    );
                },
                ConfigLoadStatus::Invalid(message) => {
                    log::warn!(
                        "config file invalid, using defaults: {message}"
                    );
                },
            }
            config
        },
        Err(err) => {
            log::warn!("failed to read config, using defaults: {err}");
            AppConfig::default()
        },
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigLoad, ConfigError> {
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ConfigLoad::new(
                AppConfig::default(),
                ConfigLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<AppConfig>(&data) {
        Ok(config) => Ok(ConfigLoad::new(config, ConfigLoadStatus::Loaded)),
        Err(err) => Ok(ConfigLoad::new(
            AppConfig::default(),
            ConfigLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("reupcycle")
            .join("config.json");
    }

    std::env::temp_dir().join("reupcycle").join("config.json")
}
