//! Server configuration
//!
//! Loaded from `.env` and the process environment. The seeder section is the
//! same [`SeederConfig`] the CLI uses, so a refresh through the API runs
//! exactly what `top10-seeder run` would.

use serde::{Deserialize, Serialize};
use top10_seeder::SeederConfig;

pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8000;
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "*";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub seeder: SeederConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Run one refresh before accepting requests
    pub refresh_on_start: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_CORS_ALLOWED_ORIGIN.to_string()],
        }
    }
}

impl Config {
    /// Load configuration from environment and defaults
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            server: ServerConfig {
                host: std::env::var("TOP10_HOST")
                    .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
                port: std::env::var("TOP10_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_SERVER_PORT),
                refresh_on_start: std::env::var("TOP10_REFRESH_ON_START")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(true),
            },
            cors: CorsConfig {
                allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_CORS_ALLOWED_ORIGIN.to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            seeder: SeederConfig::from_env(),
        };

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.host.is_empty() {
            anyhow::bail!("Server host cannot be empty");
        }

        if self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0");
        }

        self.seeder
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid seeder configuration: {}", e))?;

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
