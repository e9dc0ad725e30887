//! Repositorios
//!
//! Acceso a datos. Un único repositorio genérico sirve a todas las entidades.

pub mod crud_repository;

pub use crud_repository::CrudRepository;
