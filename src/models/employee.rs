//! Modelo de Employee
//!
//! Empleados del taller. El rol es texto libre.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Column, Entity, Generated, SqlType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub employee_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
    pub hired_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

const COLUMNS: &[Column] = &[
    Column::primary_key("employee_id", "Unique identifier for each employee"),
    Column::required("name", SqlType::Text, "Employee name").max_length(80),
    Column::required("email", SqlType::Text, "Employee email").max_length(200),
    Column::required("phone", SqlType::Text, "Employee phone number").max_length(20),
    Column::required("role", SqlType::Text, "Employee role").max_length(80),
    Column::required("hired_date", SqlType::Date, "Date the employee was hired"),
    Column::timestamp("created_at", Generated::OnInsert, "Creation timestamp"),
];

impl Entity for Employee {
    const NAME: &'static str = "employee";
    const MODEL: &'static str = "Employee";
    const TABLE: &'static str = "employee";
    const PRIMARY_KEY: &'static str = "employee_id";
    const DESCRIPTION: &'static str = "CRUD operations for managing employees";
    const COLUMNS: &'static [Column] = COLUMNS;

    fn id(&self) -> i64 {
        self.employee_id
    }
}
