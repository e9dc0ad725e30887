//! Configuración de conexión a SQLite
//!
//! Este módulo abre el pool y aplica las migraciones embebidas.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::DatabaseConfig;

/// Conexión a la base de datos del taller
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Conectar y ejecutar migraciones
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!("🗄️  Conectando a la base de datos {}...", config.url);
        let pool = config
            .create_pool()
            .await
            .with_context(|| format!("no se pudo abrir {}", config.url))?;

        run_migrations(&pool).await?;
        info!("✅ Base de datos lista");

        Ok(Self { pool })
    }

    /// Base de datos en memoria con el esquema aplicado, para tests
    pub async fn in_memory() -> Result<Self> {
        Self::new(&DatabaseConfig::in_memory()).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Ejecutar migraciones de la base de datos
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    info!("Ejecutando migraciones...");
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("error ejecutando migraciones")?;
    Ok(())
}

/// Verificar que la conexión responde
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}
