use serde::Serialize;
use std::time::Duration;

use crate::config::{Config, ShellConfig};
use crate::models::container_client::EngineType;
use crate::models::grouping::ImageGrouping;

/// User-adjustable explorer settings, seeded from the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub group_images_by: ImageGrouping,
    #[serde(rename = "refresh_interval_ms", serialize_with = "serialize_millis")]
    pub refresh_interval: Duration,
    pub default_registry_path: String,
    pub shell: ShellSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellSettings {
    pub linux_container: String,
    pub windows_container: String,
}

impl ShellSettings {
    pub fn for_engine(&self, engine_type: EngineType) -> &str {
        match engine_type {
            EngineType::Linux => &self.linux_container,
            EngineType::Windows => &self.windows_container,
        }
    }
}

impl From<&ShellConfig> for ShellSettings {
    fn from(value: &ShellConfig) -> Self {
        ShellSettings {
            linux_container: value.linux_container.clone(),
            windows_container: value.windows_container.clone(),
        }
    }
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Settings {
            group_images_by: config.explorer.group_images_by,
            refresh_interval: Duration::from_millis(config.explorer.refresh_interval_ms),
            default_registry_path: config.registry.default_registry_path.clone(),
            shell: ShellSettings::from(&config.shell),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from(&Config::default())
    }
}

fn serialize_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u128(duration.as_millis())
}
