use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct BrowserConfig {
    /// Connection settings for TheCocktailDB
    #[serde(default)]
    pub api: ApiConfig,
    /// Ingredients suggested when a search finds nothing
    #[serde(default = "default_popular_ingredients")]
    pub popular_ingredients: Vec<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            popular_ingredients: default_popular_ingredients(),
        }
    }
}

/// Configuration for the HTTP client
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Number of retries after a failed attempt
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,
    /// Delay between attempts in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            user_agent: default_user_agent(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.thecocktaildb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_retry_attempts() -> u32 {
    1
}

fn default_retry_delay_ms() -> u64 {
    500
}

fn default_user_agent() -> String {
    concat!("cocktail-browser/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_popular_ingredients() -> Vec<String> {
    ["vodka", "gin", "rum", "tequila", "lemon", "mint"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl BrowserConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COCKTAIL__ prefix
    /// 2. `path` if given, otherwise cocktail.toml in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COCKTAIL__API__BASE_URL
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name("cocktail").required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            // Use double underscore for nested: COCKTAIL__API__RETRY_ATTEMPTS
            .add_source(
                Environment::with_prefix("COCKTAIL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
