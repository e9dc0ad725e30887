use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use tracing::error;

use crate::database::connection::ping;
use crate::dto::health_dto::HealthResponse;
use crate::dto::schema_dto::SchemaDocument;
use crate::schema::api_document;
use crate::state::AppState;
use crate::utils::errors::{AppError, NOT_FOUND_MESSAGE};

pub fn create_system_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check).fallback(method_not_allowed))
        .route("/api/docs", get(api_docs).fallback(method_not_allowed))
}

/// Health check: 503 si la base de datos no responde
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, database) = match ping(&state.pool).await {
        Ok(()) => (StatusCode::OK, "up"),
        Err(e) => {
            error!("❌ Health check: base de datos no disponible: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "down")
        }
    };

    let body = HealthResponse {
        status: if status == StatusCode::OK { "ok" } else { "degraded" }.to_string(),
        database: database.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    (status, Json(body))
}

async fn api_docs() -> Json<SchemaDocument> {
    Json(api_document())
}

/// Respuesta para cualquier ruta desconocida
pub async fn not_found_fallback() -> AppError {
    AppError::NotFound(NOT_FOUND_MESSAGE.to_string())
}

/// Respuesta para un método no soportado en una ruta existente
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
