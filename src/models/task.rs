//! Modelo de Task

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Column, Entity, Generated, SqlType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub task_id: i64,
    pub description: String,
    pub status: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub employee_id: Option<i64>,
    pub work_id: Option<i64>,
    pub created_at: NaiveDateTime,
}

const COLUMNS: &[Column] = &[
    Column::primary_key("task_id", "Unique identifier for each task"),
    Column::required("description", SqlType::Text, "Task description").max_length(200),
    Column::required("status", SqlType::Text, "Task status").max_length(80),
    Column::required("start_date", SqlType::Date, "Task start date"),
    Column::optional("end_date", SqlType::Date, "Task end date"),
    Column::optional("employee_id", SqlType::Integer, "Employee assigned to the task"),
    Column::optional("work_id", SqlType::Integer, "Work the task belongs to"),
    Column::timestamp("created_at", Generated::OnInsert, "Creation timestamp"),
];

impl Entity for Task {
    const NAME: &'static str = "task";
    const MODEL: &'static str = "Task";
    const TABLE: &'static str = "task";
    const PRIMARY_KEY: &'static str = "task_id";
    const DESCRIPTION: &'static str = "CRUD operations for managing tasks";
    const COLUMNS: &'static [Column] = COLUMNS;

    fn id(&self) -> i64 {
        self.task_id
    }
}
