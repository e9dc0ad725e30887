//! Modelo de Work
//!
//! Órdenes de trabajo sobre un vehículo. El estado es texto libre.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Column, Entity, Generated, SqlType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Work {
    pub work_id: i64,
    pub description: String,
    pub cost: f64,
    pub status: String,
    pub start_date: Option<NaiveDateTime>,
    pub end_date: Option<NaiveDate>,
    pub vehicle_id: i64,
    pub created_at: NaiveDateTime,
}

const COLUMNS: &[Column] = &[
    Column::primary_key("work_id", "Unique identifier for each work"),
    Column::required("description", SqlType::Text, "Work description"),
    Column::required("cost", SqlType::Float, "Work cost"),
    Column::required("status", SqlType::Text, "Work status"),
    Column::optional("start_date", SqlType::DateTime, "Work start date"),
    Column::optional("end_date", SqlType::Date, "Work end date"),
    Column::required("vehicle_id", SqlType::Integer, "Vehicle under repair"),
    Column::timestamp("created_at", Generated::OnInsert, "Creation timestamp"),
];

impl Entity for Work {
    const NAME: &'static str = "work";
    const MODEL: &'static str = "Work";
    const TABLE: &'static str = "work";
    const PRIMARY_KEY: &'static str = "work_id";
    const DESCRIPTION: &'static str = "CRUD operations for managing works";
    const COLUMNS: &'static [Column] = COLUMNS;

    fn id(&self) -> i64 {
        self.work_id
    }
}
