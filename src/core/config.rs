use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::awesome_miner::{AwesomeMinerClient, FleetProfile, FleetRegistry, DEFAULT_PORT};
use crate::error::{RigmonError, Result};

pub const PC_NAME_ENV: &str = "RIGMON_PC_NAME";
pub const PORT_ENV: &str = "RIGMON_PORT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AwesomeMinerConfig {
    /// PC running the Awesome Miner control software
    #[serde(default = "default_pc_name")]
    pub pc_name: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_pc_name() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for AwesomeMinerConfig {
    fn default() -> Self {
        Self {
            pc_name: default_pc_name(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub awesome_miner: AwesomeMinerConfig,
    /// Fleet profiles added to or replacing the built-in ones
    #[serde(default)]
    pub fleets: Vec<FleetProfile>,
}

impl Config {
    /// Load from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing default file yields the default config; a missing explicit
    /// file is an error. Environment overrides are applied afterwards.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(RigmonError::config(format!(
                        "Configuration file not found: {:?}",
                        path
                    )));
                }
                Self::load_from_file(path)?
            }
            None => {
                let default_path = Self::get_config_path()?;
                if default_path.exists() {
                    Self::load_from_file(&default_path)?
                } else {
                    log::debug!("No config at {:?}, using defaults", default_path);
                    Config::default()
                }
            }
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        log::debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(pc_name) = std::env::var(PC_NAME_ENV) {
            self.awesome_miner.pc_name = pc_name;
        }
        if let Ok(port) = std::env::var(PORT_ENV) {
            self.awesome_miner.port = port
                .trim()
                .parse()
                .map_err(|_| RigmonError::config(format!("{} is not a valid port: {}", PORT_ENV, port)))?;
        }
        Ok(())
    }

    /// Write to the default location
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| RigmonError::config("Could not determine config directory"))?;

        Ok(config_dir.join("rigmon").join("config.toml"))
    }

    /// Built-in fleets with the configured profiles applied on top
    pub fn fleet_registry(&self) -> FleetRegistry {
        let mut registry = FleetRegistry::default();
        for profile in &self.fleets {
            registry.register(profile.clone());
        }
        registry
    }

    pub fn client(&self) -> Result<AwesomeMinerClient> {
        AwesomeMinerClient::new(
            &self.awesome_miner.pc_name,
            self.awesome_miner.port,
            Duration::from_secs(self.awesome_miner.timeout_secs),
        )
    }
}
