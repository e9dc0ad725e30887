//! Modelo de Client
//!
//! Clientes del taller. El nombre es único.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Column, Entity, Generated, SqlType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub client_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub created_at: NaiveDateTime,
}

const COLUMNS: &[Column] = &[
    Column::primary_key("client_id", "Unique identifier for each client"),
    Column::required("name", SqlType::Text, "Client name, must be unique").max_length(80),
    Column::required("email", SqlType::Text, "Client email").max_length(200),
    Column::required("phone", SqlType::Text, "Client phone number").max_length(20),
    Column::required("address", SqlType::Text, "Client address").max_length(200),
    Column::timestamp("created_at", Generated::OnInsert, "Creation timestamp"),
];

impl Entity for Client {
    const NAME: &'static str = "client";
    const MODEL: &'static str = "Client";
    const TABLE: &'static str = "client";
    const PRIMARY_KEY: &'static str = "client_id";
    const DESCRIPTION: &'static str = "CRUD operations for managing clients";
    const COLUMNS: &'static [Column] = COLUMNS;

    fn id(&self) -> i64 {
        self.client_id
    }
}
