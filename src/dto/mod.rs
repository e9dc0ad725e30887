//! DTOs
//!
//! Estructuras de respuesta que no son filas de una entidad.

pub mod health_dto;
pub mod schema_dto;
