use std::env;
use std::time::Duration;

use crate::log_info;
use crate::shared::errors::{AppError, AppResult};

/// Application configuration, read from the process environment.
///
/// A `.env` file in the working directory is loaded first when present.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database: DatabaseConfig::from_env()?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_size: u32,
    pub min_idle: u32,
    pub connection_timeout: Duration,
}

impl DatabaseConfig {
    pub fn from_env() -> AppResult<Self> {
        let url = env::var("DATABASE_URL").map_err(|_| {
            AppError::ServiceUnavailable("DATABASE_URL environment variable not found".to_string())
        })?;
        Self::validate_url(&url)?;

        let (default_max, default_min) = Self::default_pool_size();
        let max_size = Self::parse_var("DATABASE_POOL_MAX_SIZE", default_max)?;
        let min_idle = Self::parse_var("DATABASE_POOL_MIN_IDLE", default_min)?;
        let timeout_secs = Self::parse_var("DATABASE_CONNECT_TIMEOUT_SECS", 10u64)?;

        if min_idle > max_size {
            return Err(AppError::ValidationError(format!(
                "DATABASE_POOL_MIN_IDLE ({}) exceeds DATABASE_POOL_MAX_SIZE ({})",
                min_idle, max_size
            )));
        }

        let config = Self {
            url,
            max_size,
            min_idle,
            connection_timeout: Duration::from_secs(timeout_secs),
        };
        log_info!("Database configured for: {}", config.redacted_url());
        Ok(config)
    }

    /// Host and database part of the URL, without credentials
    pub fn redacted_url(&self) -> &str {
        self.url.rsplit('@').next().unwrap_or("unknown_host")
    }

    fn validate_url(url: &str) -> AppResult<()> {
        if !url.starts_with("postgres://") && !url.starts_with("postgresql://") {
            return Err(AppError::ValidationError(
                "Invalid database URL format. Must start with postgres:// or postgresql://"
                    .to_string(),
            ));
        }
        Ok(())
    }

    fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> AppResult<T> {
        match env::var(name) {
            Ok(raw) => raw.trim().parse::<T>().map_err(|_| {
                AppError::ValidationError(format!("{} has an invalid value: {}", name, raw))
            }),
            Err(_) => Ok(default),
        }
    }

    /// Pool size scaled to the machine, capped at 20 connections
    fn default_pool_size() -> (u32, u32) {
        let cpu_count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);

        let max_size = std::cmp::min(cpu_count * 2, 20);
        let min_idle = std::cmp::max(2, max_size / 4);

        (max_size as u32, min_idle as u32)
    }
}
