//! Utilidades de contraseñas
//!
//! Hash y verificación con bcrypt. Ninguna ruta las usa todavía: la API no
//! tiene autenticación.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::utils::errors::{AppError, AppResult};

/// Hash de una contraseña en texto plano
pub fn hash_password(password: &str) -> AppResult<String> {
    hash_password_with_cost(password, DEFAULT_COST)
}

pub(crate) fn hash_password_with_cost(password: &str, cost: u32) -> AppResult<String> {
    hash(password, cost).map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))
}

/// Comprueba si `password` corresponde a `hashed_password`
pub fn verify_password(hashed_password: &str, password: &str) -> AppResult<bool> {
    verify(password, hashed_password)
        .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))
}
