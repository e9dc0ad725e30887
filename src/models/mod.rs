//! Modelos del sistema
//!
//! Cada entidad del taller se describe con un registro tipado (que mapea la
//! fila de SQLite) y una tabla explícita de columnas. El repositorio CRUD
//! genérico, la coerción de payloads y el sintetizador de esquema consumen
//! esa misma tabla.

pub mod client;
pub mod employee;
pub mod invoice;
pub mod invoice_item;
pub mod setting;
pub mod task;
pub mod vehicle;
pub mod work;

pub use client::Client;
pub use employee::Employee;
pub use invoice::Invoice;
pub use invoice_item::InvoiceItem;
pub use setting::Setting;
pub use task::Task;
pub use vehicle::Vehicle;
pub use work::Work;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{de::DeserializeOwned, Serialize};
use sqlx::{sqlite::SqliteRow, FromRow};

/// Tipo de almacenamiento de una columna
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Integer,
    Text,
    Date,
    DateTime,
    Boolean,
    Float,
    /// Tipo sin correspondencia directa en el esquema de la API
    Other(&'static str),
}

/// Cuándo el servidor asigna el valor de una columna
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generated {
    Never,
    /// Timestamp asignado al insertar
    OnInsert,
    /// Timestamp asignado al insertar y en cada actualización
    OnWrite,
}

/// Descriptor de una columna de una entidad
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub nullable: bool,
    pub primary_key: bool,
    pub read_only: bool,
    pub generated: Generated,
    /// Si se omite al crear, toma la hora actual
    pub defaults_to_now: bool,
    pub max_length: Option<usize>,
    pub description: &'static str,
}

impl Column {
    const fn base(name: &'static str, sql_type: SqlType, description: &'static str) -> Self {
        Self {
            name,
            sql_type,
            nullable: false,
            primary_key: false,
            read_only: false,
            generated: Generated::Never,
            defaults_to_now: false,
            max_length: None,
            description,
        }
    }

    pub const fn primary_key(name: &'static str, description: &'static str) -> Self {
        Self {
            primary_key: true,
            ..Self::base(name, SqlType::Integer, description)
        }
    }

    pub const fn required(
        name: &'static str,
        sql_type: SqlType,
        description: &'static str,
    ) -> Self {
        Self::base(name, sql_type, description)
    }

    pub const fn optional(
        name: &'static str,
        sql_type: SqlType,
        description: &'static str,
    ) -> Self {
        Self {
            nullable: true,
            ..Self::base(name, sql_type, description)
        }
    }

    pub const fn timestamp(
        name: &'static str,
        generated: Generated,
        description: &'static str,
    ) -> Self {
        Self {
            generated,
            ..Self::base(name, SqlType::DateTime, description)
        }
    }

    pub const fn max_length(self, max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
            ..self
        }
    }

    pub const fn defaults_to_now(self) -> Self {
        Self {
            defaults_to_now: true,
            ..self
        }
    }

    pub const fn read_only(self) -> Self {
        Self {
            read_only: true,
            ..self
        }
    }

    /// Columna que el cliente puede escribir en POST/PUT
    pub fn is_writable(&self) -> bool {
        !self.primary_key && !self.read_only && self.generated == Generated::Never
    }

    /// Columna que debe venir en el payload de creación
    pub fn is_required(&self) -> bool {
        self.is_writable() && !self.nullable && !self.defaults_to_now
    }
}

/// Valor ya coercionado, listo para enlazar a una sentencia SQL
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Boolean(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

/// Lista de pares columna/valor producida por la coerción de un payload
pub type FieldValues = Vec<(&'static str, FieldValue)>;

/// Entidad persistida del taller
///
/// El registro es la fila completa; las constantes describen la tabla y
/// la ruta bajo la que se expone.
pub trait Entity:
    for<'r> FromRow<'r, SqliteRow>
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + Unpin
    + 'static
{
    /// Segmento de ruta bajo `/api`
    const NAME: &'static str;
    /// Nombre del modelo en el documento de esquema
    const MODEL: &'static str;
    const TABLE: &'static str;
    const PRIMARY_KEY: &'static str;
    const DESCRIPTION: &'static str;
    const COLUMNS: &'static [Column];

    fn id(&self) -> i64;
}
