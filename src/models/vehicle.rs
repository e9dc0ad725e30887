//! Modelo de Vehicle
//!
//! Vehículos de los clientes. `client_id` referencia a `client`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Column, Entity, Generated, SqlType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub vehicle_id: i64,
    pub brand: String,
    pub model: String,
    pub year: i64,
    pub license_plate: String,
    pub client_id: i64,
    pub created_at: NaiveDateTime,
}

const COLUMNS: &[Column] = &[
    Column::primary_key("vehicle_id", "Unique identifier for each vehicle"),
    Column::required("brand", SqlType::Text, "Vehicle brand"),
    Column::required("model", SqlType::Text, "Vehicle model"),
    Column::required("year", SqlType::Integer, "Vehicle year"),
    Column::required("license_plate", SqlType::Text, "Vehicle license plate"),
    Column::required("client_id", SqlType::Integer, "Client who owns the vehicle"),
    Column::timestamp("created_at", Generated::OnInsert, "Creation timestamp"),
];

impl Entity for Vehicle {
    const NAME: &'static str = "vehicle";
    const MODEL: &'static str = "Vehicle";
    const TABLE: &'static str = "vehicle";
    const PRIMARY_KEY: &'static str = "vehicle_id";
    const DESCRIPTION: &'static str = "CRUD operations for managing vehicles";
    const COLUMNS: &'static [Column] = COLUMNS;

    fn id(&self) -> i64 {
        self.vehicle_id
    }
}
