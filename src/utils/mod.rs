//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación de
//! payloads y contraseñas.

pub mod errors;
pub mod security;
pub mod validation;
