//! API server configuration

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bookshelf_shared_config::{
    get_optional_env, parse_env, parse_flag, parse_list, CommonConfig, ConfigError, Environment,
};
use tracing_subscriber::EnvFilter;

/// Port the server listens on when `PORT` is not set
pub const DEFAULT_PORT: u16 = 5000;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with other services
    pub common: CommonConfig,

    /// Server port (default: 5000)
    pub port: u16,

    /// Serve the GraphiQL explorer on `GET /graphql` (default: on outside production)
    pub graphiql: bool,

    /// JSON seed document replacing the built-in library (optional)
    pub seed_file: Option<PathBuf>,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let common = CommonConfig::from_env().context("Failed to load common config")?;

        let port = parse_env("PORT", DEFAULT_PORT).context("Invalid PORT value")?;
        if port == 0 {
            bail!(ConfigError::ValidationError(
                "PORT must be between 1 and 65535".to_string()
            ));
        }

        let graphiql = parse_flag("GRAPHIQL", !common.environment.is_production())
            .context("Invalid GRAPHIQL value")?;

        Ok(Self {
            port,
            graphiql,
            seed_file: get_optional_env("SEED_FILE").map(PathBuf::from),
            cors_allowed_origins: parse_list("CORS_ORIGINS"),
            common,
        })
    }

    /// Get the environment mode
    pub fn environment(&self) -> Environment {
        self.common.environment
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.common.environment.is_production()
    }

    /// Tracing filter built from `RUST_LOG` or `LOG_LEVEL`
    ///
    /// A directive string that does not parse falls back to `info`.
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.common.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            common: CommonConfig {
                environment: Environment::Development,
                log_level: "info".to_string(),
            },
            port: DEFAULT_PORT,
            graphiql: true,
            seed_file: None,
            cors_allowed_origins: None,
        }
    }
}
