use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};
use thiserror::Error;
use tracing::info;

use crate::models::grouping::ImageGrouping;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to open config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {reason}")]
    Invalid { reason: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        use crate::errors::codes::ErrorCode;

        match self {
            ConfigError::Io(_) => ErrorCode::CONFIG_READ_FAILED,
            ConfigError::Yaml(_) => ErrorCode::CONFIG_PARSE_FAILED,
            ConfigError::Invalid { .. } => ErrorCode::CONFIG_INVALID,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ExplorerConfig {
    pub refresh_interval_ms: u64,
    pub group_images_by: ImageGrouping,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 1000,
            group_images_by: ImageGrouping::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RegistryConfig {
    pub default_registry_path: String,
    /// Obsolete host-only setting, folded into `default_registry_path` on load.
    pub default_registry: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ShellConfig {
    pub linux_container: String,
    pub windows_container: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            linux_container: r#"/bin/sh -c "[ -e /bin/bash ] && /bin/bash || /bin/sh""#
                .to_string(),
            windows_container: "powershell".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TelemetryConfig {
    pub enabled: bool,
    pub service_name: String,
    pub otlp_endpoint: String,
    pub log_level: String,
    pub excluded_modules: Vec<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            service_name: "docker-explorer".to_string(),
            otlp_endpoint: "http://localhost:4317".to_string(),
            log_level: "info".to_string(),
            excluded_modules: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub explorer: ExplorerConfig,
    pub registry: RegistryConfig,
    pub shell: ShellConfig,
    pub telemetry: TelemetryConfig,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file: File = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config.consolidate_registry_settings())
    }

    /// Loads the file when it exists, otherwise falls back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Config::from_file(path)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.explorer.refresh_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                reason: "explorer.refresh_interval_ms must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    pub fn consolidate_registry_settings(mut self) -> Self {
        let registry = std::mem::take(&mut self.registry.default_registry);
        if registry.is_empty() {
            return self;
        }

        let path = &self.registry.default_registry_path;
        let combined = if path.is_empty() {
            registry
        } else {
            format!("{}/{}", registry, path)
        };

        info!(
            "registry.default_registry is obsolete, using default_registry_path '{}'",
            combined
        );
        self.registry.default_registry_path = combined;
        self
    }
}
