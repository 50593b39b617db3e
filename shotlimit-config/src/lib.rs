use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use std::{fs, path::Path};

pub mod logging;
pub mod notifications;

pub use logging::LoggingConfig;
pub use notifications::NotificationConfig;

pub const CONFIG_FILE: &str = "shotlimit.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't read configuration file at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Couldn't parse config at {path}. Reason: {reason}")]
    Parse { path: String, reason: String },
    #[error("Invalid config at {path}: {reason}")]
    Invalid { path: String, reason: String },
}

/// Settings of the shot limit zone plugin and its replay host.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ShotLimitConfiguration {
    /// Map file scanned for `shotLimitZone` objects.
    pub map_file: String,
    pub logging: LoggingConfig,
    pub notifications: NotificationConfig,
}

impl Default for ShotLimitConfiguration {
    fn default() -> Self {
        Self {
            map_file: "map.bzw".to_string(),
            logging: LoggingConfig::default(),
            notifications: NotificationConfig::default(),
        }
    }
}

pub trait LoadTomlConfiguration {
    /// Loads the configuration at `path`, writing the defaults there first if
    /// the file does not exist yet.
    fn load_from(path: &Path) -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        let config = if path.exists() {
            let file_content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.display().to_string(),
                source,
            })?;

            toml::from_str(&file_content).map_err(|err| ConfigError::Parse {
                path: path.display().to_string(),
                reason: err.message().to_string(),
            })?
        } else {
            let content = Self::default();

            match toml::to_string(&content) {
                Ok(serialized) => {
                    if let Err(err) = fs::write(path, serialized) {
                        warn!("Couldn't write default config to {:?}. Reason: {}", path, err);
                    }
                }
                Err(err) => warn!("Couldn't serialize default config. Reason: {}", err),
            }

            content
        };

        config.validate().map_err(|reason| ConfigError::Invalid {
            path: path.display().to_string(),
            reason,
        })?;
        Ok(config)
    }

    fn load() -> Result<Self, ConfigError>
    where
        Self: Sized + Default + Serialize + DeserializeOwned,
    {
        Self::load_from(Self::get_path())
    }

    fn get_path() -> &'static Path;

    fn validate(&self) -> Result<(), String>;
}

impl LoadTomlConfiguration for ShotLimitConfiguration {
    fn get_path() -> &'static Path {
        Path::new(CONFIG_FILE)
    }

    fn validate(&self) -> Result<(), String> {
        if self.map_file.trim().is_empty() {
            return Err("map_file must not be empty".to_string());
        }
        Ok(())
    }
}
