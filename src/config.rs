use std::env;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

use crate::menu::seed;
use crate::types::MenuItem;

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingSection,
    pub menu: MenuSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let config_path = env::var("CARTA_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CARTA")
                .separator("_")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        // The generic env source splits on '_', so the seed_file key has
        // to be picked up explicitly.
        if config.menu.seed_file.is_none() {
            if let Ok(path) = env::var("CARTA_MENU_SEED_FILE") {
                config.menu.seed_file = Some(PathBuf::from(path));
            }
        }

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

/// Menu section: where the initial collection comes from.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct MenuSection {
    /// Optional path to a JSON array of menu items. When unset, the
    /// built-in seed menu is used.
    pub seed_file: Option<PathBuf>,
}

impl MenuSection {
    /// Resolve the seed collection this deployment starts from.
    pub fn load_seed(&self) -> Result<Vec<MenuItem>> {
        match &self.seed_file {
            Some(path) => seed::load_seed_file(path),
            None => Ok(seed::default_seed()),
        }
    }
}
