//! Garage API
//!
//! Backend CRUD para un taller mecánico: clientes, vehículos, trabajos,
//! tareas, empleados, facturas, líneas de factura y ajustes.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod schema;
pub mod state;
pub mod utils;

pub use routes::create_app_router;
pub use state::AppState;
