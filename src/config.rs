//! Server configuration parsed from environment variables.
//!
//! Variables (a `.env` file is honored at startup):
//! - `PORT`: listen port, default 3000
//! - `DATABASE_URL`: Postgres URL; drafts stay in memory when absent
//! - `DB_MAX_CONNECTIONS`: pool size, default 5
//! - `IDENTITY_PROVIDER`: `memory` (default) or `firebase`
//! - `FIREBASE_API_KEY`, `FIREBASE_AUTH_DOMAIN`, `FIREBASE_PROJECT_ID`,
//!   `FIREBASE_APP_ID`: required when the provider is `firebase`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::identity::config::{FirebaseWebConfig, IdentityBackend, IdentityConfig};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },

    #[error("missing required env var {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub identity: IdentityConfig,
}

impl AppConfig {
    /// Build typed config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error for unparsable values or missing Firebase settings.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error for unparsable values or missing Firebase settings.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let db_max_connections = parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), DEFAULT_DB_MAX_CONNECTIONS)?;
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let backend = match lookup("IDENTITY_PROVIDER") {
            Some(raw) => raw
                .parse::<IdentityBackend>()
                .map_err(|_| ConfigError::Invalid { var: "IDENTITY_PROVIDER", value: raw })?,
            None => IdentityBackend::default(),
        };
        let firebase = match backend {
            IdentityBackend::Firebase => Some(firebase_from_lookup(&lookup)?),
            IdentityBackend::Memory => None,
        };

        Ok(Self { port, database_url, db_max_connections, identity: IdentityConfig { backend, firebase } })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value.trim().parse::<T>().map_err(|_| ConfigError::Invalid { var, value }),
        None => Ok(default),
    }
}

fn required<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).filter(|v| !v.trim().is_empty()).ok_or(ConfigError::Missing(var))
}

fn firebase_from_lookup<F>(lookup: &F) -> Result<FirebaseWebConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(FirebaseWebConfig {
        api_key: required(lookup, "FIREBASE_API_KEY")?,
        auth_domain: required(lookup, "FIREBASE_AUTH_DOMAIN")?,
        project_id: required(lookup, "FIREBASE_PROJECT_ID")?,
        app_id: required(lookup, "FIREBASE_APP_ID")?,
    })
}
