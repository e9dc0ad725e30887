use std::marker::PhantomData;

use chrono::{NaiveDateTime, SubsecRound, Utc};
use sqlx::query::QueryAs;
use sqlx::sqlite::{Sqlite, SqliteArguments};
use sqlx::SqlitePool;
use tracing::debug;

use crate::models::{Entity, FieldValue, FieldValues, Generated};
use crate::utils::errors::{AppError, AppResult};

/// Repositorio CRUD genérico
///
/// Construye el SQL a partir de la tabla de columnas de `E`. Cada operación
/// es una única sentencia.
pub struct CrudRepository<E: Entity> {
    pool: SqlitePool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> CrudRepository<E> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    pub async fn list_all(&self) -> AppResult<Vec<E>> {
        let sql = format!("SELECT * FROM {} ORDER BY {} ASC", E::TABLE, E::PRIMARY_KEY);

        sqlx::query_as::<_, E>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::from_storage(&format!("Error listing {}", E::TABLE), e))
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<E>> {
        let sql = format!("SELECT * FROM {} WHERE {} = ?", E::TABLE, E::PRIMARY_KEY);

        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_storage(&format!("Error finding {} {}", E::TABLE, id), e))
    }

    /// Inserta una fila. Los timestamps generados y los valores por defecto
    /// de fecha se completan aquí.
    pub async fn create(&self, mut values: FieldValues) -> AppResult<E> {
        let now = now_utc();
        for column in E::COLUMNS {
            let provided = values.iter().any(|(name, _)| *name == column.name);
            if column.generated != Generated::Never || (column.defaults_to_now && !provided) {
                values.push((column.name, FieldValue::DateTime(now)));
            }
        }

        let sql = if values.is_empty() {
            format!("INSERT INTO {} DEFAULT VALUES RETURNING *", E::TABLE)
        } else {
            let names: Vec<&str> = values.iter().map(|(name, _)| *name).collect();
            let placeholders = vec!["?"; values.len()].join(", ");
            format!(
                "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
                E::TABLE,
                names.join(", "),
                placeholders
            )
        };
        debug!("{}", sql);

        let mut query = sqlx::query_as::<_, E>(&sql);
        for (_, value) in values {
            query = bind_value(query, value);
        }

        query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_storage(&format!("Error creating {}", E::TABLE), e))
    }

    /// Actualiza solo las columnas recibidas. `None` si el id no existe.
    pub async fn update(&self, id: i64, mut values: FieldValues) -> AppResult<Option<E>> {
        let now = now_utc();
        for column in E::COLUMNS.iter().filter(|c| c.generated == Generated::OnWrite) {
            values.push((column.name, FieldValue::DateTime(now)));
        }

        if values.is_empty() {
            return self.find_by_id(id).await;
        }

        let assignments: Vec<String> = values
            .iter()
            .map(|(name, _)| format!("{} = ?", name))
            .collect();
        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ? RETURNING *",
            E::TABLE,
            assignments.join(", "),
            E::PRIMARY_KEY
        );
        debug!("{}", sql);

        let mut query = sqlx::query_as::<_, E>(&sql);
        for (_, value) in values {
            query = bind_value(query, value);
        }

        query
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_storage(&format!("Error updating {} {}", E::TABLE, id), e))
    }

    /// Borrado físico; devuelve la fila eliminada o `None` si no existía.
    pub async fn delete(&self, id: i64) -> AppResult<Option<E>> {
        let sql = format!(
            "DELETE FROM {} WHERE {} = ? RETURNING *",
            E::TABLE,
            E::PRIMARY_KEY
        );

        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::from_storage(&format!("Error deleting {} {}", E::TABLE, id), e))
    }
}

fn now_utc() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(0)
}

fn bind_value<'q, E>(
    query: QueryAs<'q, Sqlite, E, SqliteArguments<'q>>,
    value: FieldValue,
) -> QueryAs<'q, Sqlite, E, SqliteArguments<'q>> {
    match value {
        FieldValue::Null => query.bind(None::<String>),
        FieldValue::Integer(v) => query.bind(v),
        FieldValue::Float(v) => query.bind(v),
        FieldValue::Text(v) => query.bind(v),
        FieldValue::Boolean(v) => query.bind(v),
        FieldValue::Date(v) => query.bind(v),
        FieldValue::DateTime(v) => query.bind(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DatabaseConnection;
    use crate::models::{Client, Invoice, InvoiceItem, Setting, Vehicle};
    use crate::utils::validation::{parse_create, parse_patch};
    use serde_json::json;

    async fn pool() -> SqlitePool {
        DatabaseConnection::in_memory().await.unwrap().pool().clone()
    }

    async fn create<E: Entity>(pool: &SqlitePool, body: serde_json::Value) -> AppResult<E> {
        let values = parse_create(E::COLUMNS, &body)?;
        CrudRepository::<E>::new(pool.clone()).create(values).await
    }

    fn acme() -> serde_json::Value {
        json!({ "name": "Acme", "email": "a@b.com", "phone": "555", "address": "1 Main" })
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let pool = pool().await;
        let repo = CrudRepository::<Client>::new(pool.clone());

        let created: Client = create(&pool, acme()).await.unwrap();
        assert!(created.client_id > 0);
        assert_eq!(created.name, "Acme");

        let fetched = repo.find_by_id(created.client_id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let repo = CrudRepository::<Vehicle>::new(pool().await);
        assert_eq!(repo.find_by_id(999).await.unwrap(), None);
        assert_eq!(repo.update(999, Vec::new()).await.unwrap(), None);
        assert_eq!(repo.delete(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_returns_row_and_removes_it() {
        let pool = pool().await;
        let repo = CrudRepository::<Client>::new(pool.clone());
        let created: Client = create(&pool, acme()).await.unwrap();

        let deleted = repo.delete(created.client_id).await.unwrap();
        assert_eq!(deleted, Some(created.clone()));
        assert_eq!(repo.find_by_id(created.client_id).await.unwrap(), None);
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_is_a_partial_patch() {
        let pool = pool().await;
        let repo = CrudRepository::<Client>::new(pool.clone());
        let created: Client = create(&pool, acme()).await.unwrap();

        let patch = parse_patch(Client::COLUMNS, &json!({ "phone": "", "email": null })).unwrap();
        let updated = repo.update(created.client_id, patch).await.unwrap().unwrap();

        assert_eq!(updated.phone, "");
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_duplicate_client_name_is_a_conflict() {
        let pool = pool().await;
        create::<Client>(&pool, acme()).await.unwrap();

        let err = create::<Client>(&pool, acme()).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_vehicle_requires_existing_client() {
        let pool = pool().await;
        let body = json!({
            "brand": "Seat", "model": "Ibiza", "year": 2015,
            "license_plate": "1234ABC", "client_id": 42
        });

        let err = create::<Vehicle>(&pool, body).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_client_with_vehicles_cannot_be_deleted() {
        let pool = pool().await;
        let client: Client = create(&pool, acme()).await.unwrap();
        create::<Vehicle>(
            &pool,
            json!({
                "brand": "Seat", "model": "Ibiza", "year": 2015,
                "license_plate": "1234ABC", "client_id": client.client_id
            }),
        )
        .await
        .unwrap();

        let err = CrudRepository::<Client>::new(pool.clone())
            .delete(client.client_id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_invoice_delete_cascades_to_items() {
        let pool = pool().await;
        let invoice: Invoice = create(
            &pool,
            json!({ "client_id": 1, "iva": 21.0, "total": 100.0, "total_with_iva": 121.0 }),
        )
        .await
        .unwrap();

        for cost in [40.0, 60.0] {
            create::<InvoiceItem>(
                &pool,
                json!({ "description": "Mano de obra", "cost": cost, "invoice_id": invoice.invoice_id, "task_id": 1 }),
            )
            .await
            .unwrap();
        }

        let items = CrudRepository::<InvoiceItem>::new(pool.clone());
        assert_eq!(items.list_all().await.unwrap().len(), 2);

        CrudRepository::<Invoice>::new(pool.clone())
            .delete(invoice.invoice_id)
            .await
            .unwrap()
            .unwrap();
        assert!(items.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invoice_issued_at_defaults_to_now() {
        let pool = pool().await;
        let before = now_utc();
        let invoice: Invoice = create(
            &pool,
            json!({ "client_id": 1, "iva": 21.0, "total": 100.0, "total_with_iva": 121.0 }),
        )
        .await
        .unwrap();
        assert!(invoice.issued_at >= before);

        let explicit: Invoice = create(
            &pool,
            json!({ "client_id": 1, "issued_at": "2023-06-01T10:00:00", "iva": 21.0, "total": 10.0, "total_with_iva": 12.1 }),
        )
        .await
        .unwrap();
        assert_eq!(explicit.issued_at.to_string(), "2023-06-01 10:00:00");
    }

    #[tokio::test]
    async fn test_setting_updated_at_is_refreshed_on_update() {
        let pool = pool().await;
        let repo = CrudRepository::<Setting>::new(pool.clone());
        let setting: Setting = create(&pool, json!({ "key_name": "iva", "value": "21" }))
            .await
            .unwrap();

        sqlx::query("UPDATE setting SET updated_at = '2000-01-01 00:00:00' WHERE setting_id = ?")
            .bind(setting.setting_id)
            .execute(&pool)
            .await
            .unwrap();

        let updated = repo
            .update(setting.setting_id, Vec::new())
            .await
            .unwrap()
            .unwrap();
        assert!(updated.updated_at >= setting.updated_at);
        assert_eq!(updated.value, "21");
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_primary_key() {
        let pool = pool().await;
        for name in ["Zeta", "Alfa", "Mu"] {
            create::<Client>(
                &pool,
                json!({ "name": name, "email": "x@y.z", "phone": "1", "address": "c/ Mayor" }),
            )
            .await
            .unwrap();
        }

        let names: Vec<String> = CrudRepository::<Client>::new(pool)
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Zeta", "Alfa", "Mu"]);
    }
}
