//! Global eventos configuration.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT};
use crate::error::{EventosError, EventosResult};

static DEFAULT_DATA_FILE: &str = "~/.eventos/cards.json";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Configuration at ~/.config/eventos/config.toml, overridable with
/// `EVENTOS_*` environment variables (e.g. `EVENTOS_PORT=8080`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EventosConfig {
    /// JSON document holding every event
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for EventosConfig {
    fn default() -> Self {
        EventosConfig {
            data_file: default_data_file(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl EventosConfig {
    pub fn config_path() -> EventosResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventosError::Config("Could not determine config directory".into()))?
            .join("eventos");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config file (creating a commented default on first run) and
    /// apply environment overrides.
    pub fn load() -> EventosResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> EventosResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("EVENTOS"))
            .build()
            .map_err(|e| EventosError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventosError::Config(e.to_string()))
    }

    /// The data file with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    /// Lock file guarding the data file against a second server.
    pub fn lock_path(&self) -> PathBuf {
        let mut name = self.data_path().into_os_string();
        name.push(".lock");
        PathBuf::from(name)
    }

    pub fn bind_addr(&self) -> EventosResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| EventosError::Config(format!("Invalid host/port: {e}")))
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventosResult<()> {
        let contents = format!(
            "\
# eventos configuration

# JSON document with all events:
# data_file = \"{}\"

# Address the API server listens on:
# host = \"{}\"
# port = {}
",
            DEFAULT_DATA_FILE, DEFAULT_HOST, DEFAULT_PORT
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventosError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventosError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn to_toml(&self) -> EventosResult<String> {
        toml::to_string_pretty(self).map_err(|e| EventosError::Serialization(e.to_string()))
    }
}
