//! Sistema de manejo de errores
//!
//! Este módulo define el error único de la aplicación y su conversión al
//! sobre JSON uniforme `{"status": "error", "message": ...}`.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sqlx::error::ErrorKind;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Mensaje genérico para cualquier fallo interno
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Mensaje para rutas o recursos inexistentes
pub const NOT_FOUND_MESSAGE: &str = "Resource not found.";

/// Mensaje para un método no soportado en una ruta existente
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "The method is not allowed for the requested URL.";

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Sobre de error para la API
#[derive(Debug, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Clasifica un error de SQLite según la restricción violada.
    ///
    /// `context` describe la operación y solo se usa en los logs.
    pub fn from_storage(context: &str, err: sqlx::Error) -> Self {
        let kind = match &err {
            sqlx::Error::Database(db_err) => Some(db_err.kind()),
            _ => None,
        };

        match kind {
            Some(ErrorKind::UniqueViolation) => {
                warn!(error = %err, "{}: unique constraint violated", context);
                AppError::Conflict(
                    "A record with the same unique value already exists.".to_string(),
                )
            }
            Some(ErrorKind::ForeignKeyViolation) => {
                warn!(error = %err, "{}: foreign key constraint violated", context);
                AppError::Conflict(
                    "The operation references a missing record or a record that is still referenced."
                        .to_string(),
                )
            }
            Some(ErrorKind::NotNullViolation) | Some(ErrorKind::CheckViolation) => {
                warn!(error = %err, "{}: column constraint violated", context);
                AppError::BadRequest("A required field is missing or invalid.".to_string())
            }
            _ => {
                debug!("{}: unclassified storage error", context);
                AppError::Database(err)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::Database(e) => {
                error!("Database error: {}", e);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            AppError::Internal(msg) => {
                error!("Internal error: {}", msg);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            AppError::Validation(errors) => {
                let message = describe_validation_errors(&errors);
                warn!("Validation error: {}", message);
                message
            }
            AppError::NotFound(msg) => {
                warn!("Resource not found: {}", msg);
                msg
            }
            AppError::Conflict(msg) => {
                warn!("Conflict: {}", msg);
                msg
            }
            AppError::MethodNotAllowed => METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            AppError::PayloadTooLarge(msg) => {
                warn!("Payload too large: {}", msg);
                msg
            }
            AppError::BadRequest(msg) => {
                warn!("Bad request: {}", msg);
                msg
            }
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge(rejection.body_text());
        }
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        warn!("Path rejected: {}", rejection.body_text());
        AppError::NotFound(NOT_FOUND_MESSAGE.to_string())
    }
}

/// Convierte los errores de validación en un mensaje legible y estable
/// (campos en orden alfabético).
fn describe_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    let details: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: {}", field, e.code),
            })
        })
        .collect();

    format!("Input payload validation failed: {}", details.join("; "))
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: i64) -> AppError {
    AppError::NotFound(format!("{} with ID {} not found.", resource, id))
}
