use serde_json::Value;
use sqlx::SqlitePool;
use tracing::info;

use crate::models::Entity;
use crate::repositories::CrudRepository;
use crate::utils::errors::{not_found_error, AppResult};
use crate::utils::validation::{parse_create, parse_patch};

/// Controlador CRUD genérico
///
/// Coerciona los payloads con la tabla de columnas de `E` y convierte la
/// ausencia de filas en errores 404.
pub struct CrudController<E: Entity> {
    repository: CrudRepository<E>,
}

impl<E: Entity> CrudController<E> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: CrudRepository::new(pool),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<E>> {
        self.repository.list_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<E> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(E::MODEL, id))
    }

    pub async fn create(&self, body: Value) -> AppResult<E> {
        let values = parse_create(E::COLUMNS, &body)?;
        let record = self.repository.create(values).await?;
        info!("{} {} creado", E::MODEL, record.id());
        Ok(record)
    }

    pub async fn update(&self, id: i64, body: Value) -> AppResult<E> {
        let values = parse_patch(E::COLUMNS, &body)?;
        let record = self
            .repository
            .update(id, values)
            .await?
            .ok_or_else(|| not_found_error(E::MODEL, id))?;
        info!("{} {} actualizado", E::MODEL, id);
        Ok(record)
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found_error(E::MODEL, id))?;
        info!("{} {} eliminado", E::MODEL, id);
        Ok(())
    }
}
