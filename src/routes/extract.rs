//! Extractores con rechazo en formato de sobre de error
//!
//! Un JSON mal formado da 400 y un id no numérico da 404, ambos con el
//! cuerpo `{"status": "error", "message": ...}`.

use axum::extract::{FromRequest, FromRequestParts};

use crate::utils::errors::AppError;

#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
