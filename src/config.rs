use log::info;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::push::{PushConfig, DEFAULT_SERVER_URL};
use crate::serve::ServeConfig;

pub const CONFIG_FILE: &str = ".logdrop.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serve: Option<ServeConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub push: Option<PushConfig>,
}

impl AppConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn generate_config_file(force: bool) -> anyhow::Result<()> {
        Self::write_config_file(Path::new(CONFIG_FILE), force)?;
        info!("Configuration file generated: {}", CONFIG_FILE);
        info!("Please edit this file to customize configuration");
        Ok(())
    }

    pub fn write_config_file(path: &Path, force: bool) -> anyhow::Result<()> {
        if path.exists() && !force {
            anyhow::bail!(
                "Configuration file {} already exists. Use --force to overwrite.",
                path.display()
            );
        }

        fs::write(path, Self::generate_full_config()?)?;
        Ok(())
    }

    pub fn generate_full_config() -> anyhow::Result<String> {
        let config = AppConfig {
            serve: Some(ServeConfig::with_defaults()),
            push: Some(PushConfig::new(DEFAULT_SERVER_URL.to_string())),
        };
        let toml_content = toml::to_string_pretty(&config)?;
        Ok(format!(
            "# logdrop configuration file\n# All fields are optional, command line arguments override config file values\n\n{}",
            toml_content
        ))
    }
}
