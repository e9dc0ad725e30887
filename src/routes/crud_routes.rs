use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, MethodRouter},
    Json, Router,
};
use serde_json::Value;

use crate::controllers::CrudController;
use crate::dto::schema_dto::ModelSchema;
use crate::models::Entity;
use crate::routes::extract::{AppJson, AppPath};
use crate::routes::system_routes::method_not_allowed;
use crate::schema::model_schema;
use crate::state::AppState;
use crate::utils::errors::AppResult;

/// Router CRUD de una entidad bajo `/api/{E::NAME}`
///
/// La colección responde con y sin barra final.
pub fn create_crud_router<E: Entity>() -> Router<AppState> {
    let collection = format!("/api/{}", E::NAME);

    Router::new()
        .route(&collection, collection_routes::<E>())
        .route(&format!("{}/", collection), collection_routes::<E>())
        .route(
            &format!("{}/schema", collection),
            get(get_schema::<E>).fallback(method_not_allowed),
        )
        .route(
            &format!("{}/:id", collection),
            get(get_record::<E>)
                .put(update_record::<E>)
                .delete(delete_record::<E>)
                .fallback(method_not_allowed),
        )
}

fn collection_routes<E: Entity>() -> MethodRouter<AppState> {
    get(list_records::<E>)
        .post(create_record::<E>)
        .fallback(method_not_allowed)
}

async fn list_records<E: Entity>(State(state): State<AppState>) -> AppResult<Json<Vec<E>>> {
    let controller = CrudController::<E>::new(state.pool.clone());
    let records = controller.list().await?;
    Ok(Json(records))
}

async fn create_record<E: Entity>(
    State(state): State<AppState>,
    AppJson(body): AppJson<Value>,
) -> AppResult<(StatusCode, Json<E>)> {
    let controller = CrudController::<E>::new(state.pool.clone());
    let record = controller.create(body).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

async fn get_record<E: Entity>(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<E>> {
    let controller = CrudController::<E>::new(state.pool.clone());
    let record = controller.get_by_id(id).await?;
    Ok(Json(record))
}

async fn update_record<E: Entity>(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(body): AppJson<Value>,
) -> AppResult<Json<E>> {
    let controller = CrudController::<E>::new(state.pool.clone());
    let record = controller.update(id, body).await?;
    Ok(Json(record))
}

async fn delete_record<E: Entity>(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<StatusCode> {
    let controller = CrudController::<E>::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_schema<E: Entity>() -> Json<ModelSchema> {
    Json(model_schema::<E>())
}
