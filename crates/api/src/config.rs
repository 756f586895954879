use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

/// Configuration could not be read from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3030`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long in-flight requests may drain after a shutdown signal (default: `30`).
    pub shutdown_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3030`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parse_var("PORT", 3030)?;

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", 30)?;
        let shutdown_timeout_secs = parse_var("SHUTDOWN_TIMEOUT_SECS", 30)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
        })
    }
}

/// Record store connection settings.
#[derive(Debug, Clone)]
pub enum DbConfig {
    /// A full connection URL from `DATABASE_URL`.
    Url(String),
    /// Discrete connection parameters.
    Parts {
        user: String,
        password: Option<String>,
        host: String,
        port: u16,
        database: String,
    },
}

impl DbConfig {
    /// Load store settings from the environment.
    ///
    /// `DATABASE_URL` wins when set. Otherwise the connection is assembled
    /// from the individual parameters:
    ///
    /// | Env Var             | Default     |
    /// |---------------------|-------------|
    /// | `POSTGRES_USER`     | (required)  |
    /// | `POSTGRES_PASSWORD` | none        |
    /// | `POSTGRES_HOST`     | `localhost` |
    /// | `POSTGRES_PORT`     | `5432`      |
    /// | `POSTGRES_DB`       | (required)  |
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            return Ok(Self::Url(url));
        }

        let user =
            std::env::var("POSTGRES_USER").map_err(|_| ConfigError::Missing("POSTGRES_USER"))?;
        let database =
            std::env::var("POSTGRES_DB").map_err(|_| ConfigError::Missing("POSTGRES_DB"))?;
        let password = std::env::var("POSTGRES_PASSWORD").ok();
        let host = std::env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".into());
        let port = parse_var("POSTGRES_PORT", 5432)?;

        Ok(Self::Parts {
            user,
            password,
            host,
            port,
            database,
        })
    }

    /// Open a connection pool for these settings.
    pub async fn connect(&self) -> Result<todolist_db::DbPool, sqlx::Error> {
        match self {
            Self::Url(url) => todolist_db::create_pool(url).await,
            Self::Parts {
                user,
                password,
                host,
                port,
                database,
            } => {
                let mut options = PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .database(database);
                if let Some(password) = password {
                    options = options.password(password);
                }
                todolist_db::create_pool_with(options).await
            }
        }
    }
}

/// Read and parse an environment variable, falling back to `default` when unset.
fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}
