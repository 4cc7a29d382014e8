//! Seeder configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Defaults
// ============================================================================

/// Encyclopedia search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://en.wikipedia.org/w/api.php";

/// Encyclopedia page-summary endpoint; the encoded title is appended.
pub const DEFAULT_SUMMARY_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary/";

/// Contact placeholder used when `CONTACT_EMAIL` is unset.
pub const DEFAULT_CONTACT_EMAIL: &str = "anonymous@example.com";

pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Total attempts per request, including the first one.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 4;

/// Backoff before retry `n` is `n * DEFAULT_BACKOFF_STEP_MS`.
pub const DEFAULT_BACKOFF_STEP_MS: u64 = 1500;

pub const DEFAULT_IMAGE_DIR: &str = "assets/images";

pub const DEFAULT_SCRIPT_PATH: &str = "seed.sql";

pub const DEFAULT_DATABASE_URL: &str = "sqlite://db.sqlite3";

/// Configuration for one seeding run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeederConfig {
    /// Search (query) endpoint used for title resolution
    pub search_url: String,

    /// Summary endpoint prefix
    pub summary_url: String,

    /// Contact address embedded in the User-Agent header
    pub contact_email: String,

    /// HTTP timeout in seconds
    pub timeout_secs: u64,

    /// Maximum attempts per request (first try included)
    pub max_attempts: u32,

    /// Linear backoff step in milliseconds
    pub backoff_step_ms: u64,

    /// Directory receiving downloaded hero images
    pub image_dir: PathBuf,

    /// Where the seed script is written
    pub script_path: PathBuf,

    /// SQLite connection URL of the local store
    pub database_url: String,

    /// Alternative catalog (JSON); the built-in list is used when unset
    pub catalog_path: Option<PathBuf>,
}

impl Default for SeederConfig {
    fn default() -> Self {
        SeederConfig {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            summary_url: DEFAULT_SUMMARY_URL.to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff_step_ms: DEFAULT_BACKOFF_STEP_MS,
            image_dir: PathBuf::from(DEFAULT_IMAGE_DIR),
            script_path: PathBuf::from(DEFAULT_SCRIPT_PATH),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            catalog_path: None,
        }
    }
}

impl SeederConfig {
    pub fn builder() -> SeederConfigBuilder {
        SeederConfigBuilder::default()
    }

    /// Identification header value required by the encyclopedia's API etiquette
    pub fn user_agent(&self) -> String {
        format!("usa-top10-seeder/1.0 ({}) reqwest", self.contact_email)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.search_url.is_empty() {
            return Err("Search URL cannot be empty".to_string());
        }

        if self.summary_url.is_empty() {
            return Err("Summary URL cannot be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        if self.max_attempts == 0 {
            return Err("Max attempts must be at least 1".to_string());
        }

        if self.script_path.as_os_str().is_empty() {
            return Err("Seed script path cannot be empty".to_string());
        }

        if self.database_url.is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }

        Ok(())
    }
}

// ============================================================================
// Environment Variable Support
// ============================================================================

impl SeederConfig {
    /// Load configuration from `.env` and the process environment
    ///
    /// A missing `CONTACT_EMAIL` falls back to the placeholder address.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let default = SeederConfig::default();

        SeederConfig {
            search_url: std::env::var("WIKI_API_URL").unwrap_or(default.search_url),
            summary_url: std::env::var("WIKI_SUMMARY_URL").unwrap_or(default.summary_url),
            contact_email: std::env::var("CONTACT_EMAIL")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(default.contact_email),
            timeout_secs: std::env::var("SEED_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.timeout_secs),
            max_attempts: std::env::var("SEED_MAX_ATTEMPTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.max_attempts),
            backoff_step_ms: std::env::var("SEED_BACKOFF_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default.backoff_step_ms),
            image_dir: std::env::var("SEED_IMAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.image_dir),
            script_path: std::env::var("SEED_SCRIPT_PATH")
                .map(PathBuf::from)
                .unwrap_or(default.script_path),
            database_url: std::env::var("DATABASE_URL").unwrap_or(default.database_url),
            catalog_path: std::env::var("SEED_CATALOG_PATH").ok().map(PathBuf::from),
        }
    }
}

/// Builder for SeederConfig
#[derive(Debug, Default)]
pub struct SeederConfigBuilder {
    search_url: Option<String>,
    summary_url: Option<String>,
    contact_email: Option<String>,
    timeout_secs: Option<u64>,
    max_attempts: Option<u32>,
    backoff_step_ms: Option<u64>,
    image_dir: Option<PathBuf>,
    script_path: Option<PathBuf>,
    database_url: Option<String>,
    catalog_path: Option<PathBuf>,
}

impl SeederConfigBuilder {
    pub fn search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = Some(url.into());
        self
    }

    pub fn summary_url(mut self, url: impl Into<String>) -> Self {
        self.summary_url = Some(url.into());
        self
    }

    pub fn contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = Some(email.into());
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    pub fn backoff_step_ms(mut self, ms: u64) -> Self {
        self.backoff_step_ms = Some(ms);
        self
    }

    pub fn image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = Some(dir.into());
        self
    }

    pub fn script_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.script_path = Some(path.into());
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    pub fn build(self) -> SeederConfig {
        let default = SeederConfig::default();

        SeederConfig {
            search_url: self.search_url.unwrap_or(default.search_url),
            summary_url: self.summary_url.unwrap_or(default.summary_url),
            contact_email: self.contact_email.unwrap_or(default.contact_email),
            timeout_secs: self.timeout_secs.unwrap_or(default.timeout_secs),
            max_attempts: self.max_attempts.unwrap_or(default.max_attempts),
            backoff_step_ms: self.backoff_step_ms.unwrap_or(default.backoff_step_ms),
            image_dir: self.image_dir.unwrap_or(default.image_dir),
            script_path: self.script_path.unwrap_or(default.script_path),
            database_url: self.database_url.unwrap_or(default.database_url),
            catalog_path: self.catalog_path,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
