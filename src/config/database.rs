//! Configuración de base de datos
//!
//! Este módulo maneja la conexión y configuración de SQLite con SQLx.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use super::{parse_var, var_or, ConfigError};

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://garage.db".to_string(),
            max_connections: 10,
            connect_timeout: Duration::from_secs(30),
        }
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            url: var_or(&lookup, "DATABASE_URL", &defaults.url),
            max_connections: parse_var(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                defaults.max_connections,
            )?,
            connect_timeout: Duration::from_secs(parse_var(
                &lookup,
                "DATABASE_CONNECT_TIMEOUT",
                defaults.connect_timeout.as_secs(),
            )?),
        })
    }

    /// Base de datos en memoria para tests
    pub fn in_memory() -> Self {
        Self {
            url: IN_MEMORY_URL.to_string(),
            max_connections: 1,
            connect_timeout: Duration::from_secs(5),
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Crear un nuevo pool de conexiones
    ///
    /// Las claves foráneas se activan en cada conexión; sin ellas SQLite no
    /// aplica el borrado en cascada de las líneas de factura.
    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&self.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if self.is_in_memory() {
            // Cada conexión en memoria es una base distinta: una sola
            // conexión que nunca se recicla.
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(self.max_connections)
        };

        pool_options
            .acquire_timeout(self.connect_timeout)
            .connect_with(options)
            .await
    }
}
