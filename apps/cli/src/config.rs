//! # CLI Configuration
//!
//! Where the documents live and how chatty logging is.
//!
//! ## Load Order (later overrides earlier)
//! 1. Defaults (`data/*.json`, log filter `warn,hotel=info`)
//! 2. Config file (`--config <path>`, else `hotel.toml` in the platform config dir)
//! 3. Environment variables (`HOTEL_*`)
//! 4. `--data-dir` flag (applied by the caller)
//!
//! ## Example `hotel.toml`
//! ```toml
//! [storage]
//! data_dir = "/var/lib/hotel"
//! reservations_path = "/mnt/shared/reservations.json"
//!
//! [logging]
//! filter = "debug"
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use hotel_store::StoreConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Config file name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "hotel.toml";

/// Log filter used when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn,hotel=info";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Document locations.
    #[serde(default)]
    pub storage: StorageSettings,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Document locations.
///
/// `data_dir` sets all three at once; the per-document paths win over it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory holding `customers.json`, `hotels.json`, `reservations.json`.
    pub data_dir: Option<PathBuf>,

    pub customers_path: Option<PathBuf>,
    pub hotels_path: Option<PathBuf>,
    pub reservations_path: Option<PathBuf>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` takes precedence.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// An explicitly given file must exist; the platform default is optional.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    debug!("No config file, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading config file");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `hotel.toml` inside the platform config directory, if one exists.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "hotel", "reservations")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Applies `HOTEL_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key → value lookup.
    ///
    /// ## Keys
    /// - `HOTEL_DATA_DIR`
    /// - `HOTEL_CUSTOMERS_PATH`
    /// - `HOTEL_HOTELS_PATH`
    /// - `HOTEL_RESERVATIONS_PATH`
    /// - `HOTEL_LOG`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("HOTEL_DATA_DIR") {
            debug!(data_dir = %dir, "Overriding data dir from environment");
            self.storage.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(path) = lookup("HOTEL_CUSTOMERS_PATH") {
            self.storage.customers_path = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("HOTEL_HOTELS_PATH") {
            self.storage.hotels_path = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("HOTEL_RESERVATIONS_PATH") {
            self.storage.reservations_path = Some(PathBuf::from(path));
        }
        if let Some(filter) = lookup("HOTEL_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Points every document at `dir`, dropping per-document paths.
    ///
    /// Used for the `--data-dir` flag, which outranks everything else.
    pub fn override_data_dir(&mut self, dir: impl Into<PathBuf>) {
        self.storage = StorageSettings {
            data_dir: Some(dir.into()),
            ..StorageSettings::default()
        };
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let paths = [
            ("storage.data_dir", &self.storage.data_dir),
            ("storage.customers_path", &self.storage.customers_path),
            ("storage.hotels_path", &self.storage.hotels_path),
            ("storage.reservations_path", &self.storage.reservations_path),
        ];

        for (key, value) in paths {
            if matches!(value, Some(path) if path.as_os_str().is_empty()) {
                return Err(ConfigError::InvalidValue(format!("{} is empty", key)));
            }
        }

        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue("logging.filter is empty".into()));
        }

        Ok(())
    }

    /// Resolves the document paths.
    pub fn store_config(&self) -> StoreConfig {
        let mut config = match &self.storage.data_dir {
            Some(dir) => StoreConfig::in_dir(dir),
            None => StoreConfig::default(),
        };

        if let Some(path) = &self.storage.customers_path {
            config = config.customers_path(path);
        }
        if let Some(path) = &self.storage.hotels_path {
            config = config.hotels_path(path);
        }
        if let Some(path) = &self.storage.reservations_path {
            config = config.reservations_path(path);
        }

        config
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
