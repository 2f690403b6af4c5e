//! Centralized server configuration.
//!
//! Loaded via the `config` crate from environment variables, with `__`
//! separating nested keys (`DATABASE__MAX_CONNECTIONS`). The listen address
//! comes from the Leptos configuration instead.

use serde::Deserialize;

/// Server configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// PostgreSQL database connection URL.
    pub database_url: String,

    /// Connection pool configuration.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Maintenance API configuration.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Connection pool configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Maximum number of pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Maintenance API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Whether `/api` answers cross-origin requests from any origin.
    #[serde(default = "default_permissive_cors")]
    pub permissive_cors: bool,
}

fn default_max_connections() -> u32 {
    5
}

fn default_permissive_cors() -> bool {
    true
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            permissive_cors: default_permissive_cors(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(
            config::Environment::default()
                .separator("__")
                .try_parsing(true),
        )
    }

    fn from_source(
        source: impl config::Source + Send + Sync + 'static,
    ) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}
