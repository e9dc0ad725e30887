//! Módulo de base de datos
//!
//! Maneja la conexión y las migraciones de SQLite

pub mod connection;

pub use connection::DatabaseConnection;
