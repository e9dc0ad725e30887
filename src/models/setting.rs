//! Modelo de Setting
//!
//! Almacén clave/valor genérico. `key_name` es único y `updated_at` se
//! refresca en cada escritura.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Column, Entity, Generated, SqlType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Setting {
    pub setting_id: i64,
    pub key_name: String,
    pub value: String,
    pub updated_at: NaiveDateTime,
}

const COLUMNS: &[Column] = &[
    Column::primary_key("setting_id", "Unique identifier for each setting"),
    Column::required("key_name", SqlType::Text, "Setting name, must be unique").max_length(80),
    Column::required("value", SqlType::Text, "Setting value").max_length(200),
    Column::timestamp("updated_at", Generated::OnWrite, "Last write timestamp"),
];

impl Entity for Setting {
    const NAME: &'static str = "setting";
    const MODEL: &'static str = "Setting";
    const TABLE: &'static str = "setting";
    const PRIMARY_KEY: &'static str = "setting_id";
    const DESCRIPTION: &'static str = "CRUD operations for managing settings";
    const COLUMNS: &'static [Column] = COLUMNS;

    fn id(&self) -> i64 {
        self.setting_id
    }
}
