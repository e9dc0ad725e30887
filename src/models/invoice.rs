//! Modelo de Invoice
//!
//! Los totales los envía el cliente tal cual; no se recalculan. Al borrar
//! una factura, SQLite borra sus líneas (`ON DELETE CASCADE`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Column, Entity, SqlType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    pub invoice_id: i64,
    pub client_id: i64,
    pub issued_at: NaiveDateTime,
    pub iva: f64,
    pub total: f64,
    pub total_with_iva: f64,
}

const COLUMNS: &[Column] = &[
    Column::primary_key("invoice_id", "Unique identifier for each invoice"),
    Column::required("client_id", SqlType::Integer, "Invoiced client"),
    Column::required("issued_at", SqlType::DateTime, "Issue timestamp").defaults_to_now(),
    Column::required("iva", SqlType::Float, "IVA rate"),
    Column::required("total", SqlType::Float, "Total before IVA"),
    Column::required("total_with_iva", SqlType::Float, "Total including IVA"),
];

impl Entity for Invoice {
    const NAME: &'static str = "invoice";
    const MODEL: &'static str = "Invoice";
    const TABLE: &'static str = "invoice";
    const PRIMARY_KEY: &'static str = "invoice_id";
    const DESCRIPTION: &'static str = "CRUD operations for managing invoices";
    const COLUMNS: &'static [Column] = COLUMNS;

    fn id(&self) -> i64 {
        self.invoice_id
    }
}
