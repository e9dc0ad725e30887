//! Modelo de InvoiceItem

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Column, Entity, SqlType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct InvoiceItem {
    pub item_id: i64,
    pub description: String,
    pub cost: f64,
    pub invoice_id: i64,
    pub task_id: i64,
}

const COLUMNS: &[Column] = &[
    Column::primary_key("item_id", "Unique identifier for each invoice item"),
    Column::required("description", SqlType::Text, "Line description"),
    Column::required("cost", SqlType::Float, "Line cost"),
    Column::required("invoice_id", SqlType::Integer, "Invoice the line belongs to"),
    Column::required("task_id", SqlType::Integer, "Invoiced task"),
];

impl Entity for InvoiceItem {
    const NAME: &'static str = "invoice_item";
    const MODEL: &'static str = "InvoiceItem";
    const TABLE: &'static str = "invoice_item";
    const PRIMARY_KEY: &'static str = "item_id";
    const DESCRIPTION: &'static str = "CRUD operations for managing invoice items";
    const COLUMNS: &'static [Column] = COLUMNS;

    fn id(&self) -> i64 {
        self.item_id
    }
}
