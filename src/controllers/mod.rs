//! Controladores
//!
//! Capa entre las rutas HTTP y los repositorios.

pub mod crud_controller;

pub use crud_controller::CrudController;
