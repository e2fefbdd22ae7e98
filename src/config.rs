//! Server configuration, read from environment variables (or a `.env` file).

use axum::http::{header::InvalidHeaderValue, HeaderValue};
use thiserror::Error;

/// The address to listen on when `ADDRESS` isn't set.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:3000";

/// The client origin allowed by CORS when `CLIENT_ORIGIN` isn't set.
pub const DEFAULT_CLIENT_ORIGIN: &str = "http://localhost:5000";

/// The server's configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// The address the server should listen on, from `ADDRESS`.
    pub address: String,

    /// The PostgreSQL connection string, from `DATABASE_URL`. Required.
    pub database_url: String,

    /// The only origin allowed to make cross-origin requests, from `CLIENT_ORIGIN`.
    pub client_origin: HeaderValue,
}

/// An error reading the [`Config`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A required environment variable wasn't set.
    #[error("environment variable `{0}` should be set")]
    Missing(&'static str),

    /// `CLIENT_ORIGIN` can't be used as a header value.
    #[error("environment variable `CLIENT_ORIGIN` should be a valid origin: {0}")]
    ClientOrigin(#[from] InvalidHeaderValue),
}

impl Config {
    /// Reads the configuration from the process environment, loading a `.env` file first if one
    /// exists.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(|key| dotenvy::var(key).ok())
    }

    /// Reads the configuration using the specified function to look up variables.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub fn from_vars<F>(var: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = var("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(Error::Missing("DATABASE_URL"))?;

        let address = var("ADDRESS").unwrap_or_else(|| DEFAULT_ADDRESS.into());

        let client_origin = match var("CLIENT_ORIGIN") {
            Some(origin) => HeaderValue::try_from(origin)?,
            None => HeaderValue::from_static(DEFAULT_CLIENT_ORIGIN),
        };

        Ok(Self {
            address,
            database_url,
            client_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, Error> {
        let vars: HashMap<_, _> = vars.iter().copied().collect();

        Config::from_vars(|key| vars.get(key).map(|value| (*value).to_owned()))
    }

    #[test]
    fn database_url_required() {
        let missing = config_from(&[("ADDRESS", "0.0.0.0:8080")]);
        assert!(
            matches!(missing, Err(Error::Missing("DATABASE_URL"))),
            "missing `DATABASE_URL` should be an error",
        );

        let empty = config_from(&[("DATABASE_URL", "")]);
        assert!(
            matches!(empty, Err(Error::Missing("DATABASE_URL"))),
            "empty `DATABASE_URL` should be an error",
        );
    }

    #[test]
    fn defaults_used() -> anyhow::Result<()> {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/todos")])?;

        assert_eq!(config.database_url, "postgres://localhost/todos");
        assert_eq!(config.address, DEFAULT_ADDRESS);
        assert_eq!(config.client_origin, DEFAULT_CLIENT_ORIGIN);

        Ok(())
    }

    #[test]
    fn overrides_used() -> anyhow::Result<()> {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/todos"),
            ("ADDRESS", "0.0.0.0:8080"),
            ("CLIENT_ORIGIN", "https://todos.example.com"),
        ])?;

        assert_eq!(config.address, "0.0.0.0:8080");
        assert_eq!(config.client_origin, "https://todos.example.com");

        Ok(())
    }

    #[test]
    fn invalid_client_origin_rejected() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/todos"),
            ("CLIENT_ORIGIN", "http://bad\norigin"),
        ]);

        assert!(
            matches!(config, Err(Error::ClientOrigin(_))),
            "client origin with a newline should be an error",
        );
    }
}
