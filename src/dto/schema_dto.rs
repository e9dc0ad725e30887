use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tipo de un campo en el esquema de la API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Integer,
    String,
    Date,
    DateTime,
    Boolean,
    Number,
}

// Campo del esquema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub description: String,
    pub required: bool,
    pub nullable: bool,
    pub read_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

// Esquema de una entidad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSchema {
    pub name: String,
    pub description: String,
    pub path: String,
    pub primary_key: String,
    pub fields: Vec<SchemaField>,
}

// Documento completo servido en /api/docs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    pub title: String,
    pub version: String,
    pub description: String,
    pub models: BTreeMap<String, ModelSchema>,
}
