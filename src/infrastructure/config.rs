//! Configuration infrastructure
//!
//! Settings are loaded from a JSON file under the user config directory,
//! created with defaults on first run. A few environment variables override
//! the file for deployment convenience: `INVENTORY_DATABASE_URL`,
//! `INVENTORY_PORT` and `INVENTORY_BASE_URL`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::info;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    pub port: u16,
    /// External base URL used for hypermedia links and the Location header.
    /// Falls back to `http://{host}:{port}` when unset.
    pub base_url: Option<String>,
}

impl ServerConfig {
    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.host, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            base_url: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// sqlx connection URL, e.g. `sqlite://inventory.db`.
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level when RUST_LOG is not set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

fn default_database_url() -> String {
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("product-inventory");
    format!("sqlite://{}", data_dir.join("inventory.db").display())
}

/// Configuration manager for loading and saving settings.
pub struct ConfigManager {
    pub config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        let config_dir = dirs::config_dir()
            .context("Failed to get user config directory")?
            .join("product-inventory");
        Ok(Self {
            config_path: config_dir.join("config.json"),
        })
    }

    /// Load configuration from file, creating defaults if it doesn't exist,
    /// then apply environment overrides.
    pub async fn load_config(&self) -> Result<AppConfig> {
        let mut config = if self.config_path.exists() {
            let content = fs::read_to_string(&self.config_path)
                .await
                .context("Failed to read configuration file")?;
            serde_json::from_str::<AppConfig>(&content)
                .with_context(|| format!("Invalid configuration file: {:?}", self.config_path))?
        } else {
            info!(
                "Configuration file not found, creating default: {:?}",
                self.config_path
            );
            let default_config = AppConfig::default();
            self.save_config(&default_config).await?;
            default_config
        };

        if let Ok(url) = std::env::var("INVENTORY_DATABASE_URL") {
            config.database.url = url;
        }
        if let Ok(port) = std::env::var("INVENTORY_PORT") {
            config.server.port = port
                .parse()
                .context("INVENTORY_PORT must be a port number")?;
        }
        if let Ok(base_url) = std::env::var("INVENTORY_BASE_URL") {
            config.server.base_url = Some(base_url);
        }

        Ok(config)
    }

    pub async fn save_config(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .context("Failed to create config directory")?;
        }
        let content =
            serde_json::to_string_pretty(config).context("Failed to serialize configuration")?;
        fs::write(&self.config_path, content)
            .await
            .context("Failed to write configuration file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn load_config_creates_defaults_on_first_run() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager {
            config_path: dir.path().join("config.json"),
        };

        let config = manager.load_config().await.unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(manager.config_path.exists());
    }

    #[tokio::test]
    async fn load_config_round_trips_saved_settings() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager {
            config_path: dir.path().join("config.json"),
        };

        let mut config = AppConfig::default();
        config.server.port = 9090;
        config.database.url = "sqlite://test.db".to_string();
        manager.save_config(&config).await.unwrap();

        let loaded = manager.load_config().await.unwrap();
        assert_eq!(loaded.server.port, 9090);
        assert_eq!(loaded.database.url, "sqlite://test.db");
    }

    #[test]
    fn base_url_falls_back_to_host_and_port() {
        let server = ServerConfig::default();
        assert_eq!(server.base_url(), "http://127.0.0.1:8080");

        let server = ServerConfig {
            base_url: Some("https://inventory.example.com".to_string()),
            ..ServerConfig::default()
        };
        assert_eq!(server.base_url(), "https://inventory.example.com");
    }
}
