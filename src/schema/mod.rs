//! Sintetizador de esquema
//!
//! Deriva el esquema de la API a partir de las tablas de columnas de las
//! entidades. No hay introspección en tiempo de ejecución: todo sale de
//! `Entity::COLUMNS`.

use std::collections::BTreeMap;

use crate::dto::schema_dto::{FieldType, ModelSchema, SchemaDocument, SchemaField};
use crate::models::{
    Client, Column, Employee, Entity, Invoice, InvoiceItem, Setting, SqlType, Task, Vehicle, Work,
};

pub const API_TITLE: &str = "Garage API";
pub const API_VERSION: &str = "1.0";
pub const API_DESCRIPTION: &str = "CRUD management API for an auto-repair shop";

/// Tipo del esquema para un tipo de almacenamiento; lo desconocido es `string`
pub fn field_type(sql_type: SqlType) -> FieldType {
    match sql_type {
        SqlType::Integer => FieldType::Integer,
        SqlType::Text => FieldType::String,
        SqlType::Date => FieldType::Date,
        SqlType::DateTime => FieldType::DateTime,
        SqlType::Boolean => FieldType::Boolean,
        SqlType::Float => FieldType::Number,
        SqlType::Other(_) => FieldType::String,
    }
}

/// Campos del esquema en el orden de las columnas.
///
/// Un campo es de solo lectura si es clave primaria, es generado por el
/// servidor, está marcado en la columna o aparece en `read_only`.
pub fn synthesize_fields(columns: &[Column], read_only: &[&str]) -> Vec<SchemaField> {
    columns
        .iter()
        .map(|column| SchemaField {
            name: column.name.to_string(),
            field_type: field_type(column.sql_type),
            description: column.description.to_string(),
            required: column.is_required(),
            nullable: column.nullable,
            read_only: !column.is_writable() || read_only.contains(&column.name),
            max_length: column.max_length,
        })
        .collect()
}

pub fn model_schema<E: Entity>() -> ModelSchema {
    ModelSchema {
        name: E::MODEL.to_string(),
        description: E::DESCRIPTION.to_string(),
        path: format!("/api/{}/", E::NAME),
        primary_key: E::PRIMARY_KEY.to_string(),
        fields: synthesize_fields(E::COLUMNS, &[]),
    }
}

/// Documento completo con todas las entidades
pub fn api_document() -> SchemaDocument {
    let models = [
        model_schema::<Client>(),
        model_schema::<Vehicle>(),
        model_schema::<Work>(),
        model_schema::<Task>(),
        model_schema::<Employee>(),
        model_schema::<Invoice>(),
        model_schema::<InvoiceItem>(),
        model_schema::<Setting>(),
    ];

    SchemaDocument {
        title: API_TITLE.to_string(),
        version: API_VERSION.to_string(),
        description: API_DESCRIPTION.to_string(),
        models: models
            .into_iter()
            .map(|model| (model.name.clone(), model))
            .collect::<BTreeMap<_, _>>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Generated;

    fn field<'a>(fields: &'a [SchemaField], name: &str) -> &'a SchemaField {
        fields.iter().find(|f| f.name == name).unwrap()
    }

    #[test]
    fn test_type_mapping_defaults_to_string() {
        assert_eq!(field_type(SqlType::Integer), FieldType::Integer);
        assert_eq!(field_type(SqlType::Float), FieldType::Number);
        assert_eq!(field_type(SqlType::DateTime), FieldType::DateTime);
        assert_eq!(field_type(SqlType::Other("BLOB")), FieldType::String);
    }

    #[test]
    fn test_read_only_fields() {
        let columns = [
            Column::primary_key("id", "pk"),
            Column::required("name", SqlType::Text, "name"),
            Column::required("code", SqlType::Text, "code"),
            Column::timestamp("created_at", Generated::OnInsert, "created"),
            Column::required("notes", SqlType::Other("JSON"), "notes").read_only(),
        ];

        let fields = synthesize_fields(&columns, &["code"]);
        assert!(field(&fields, "id").read_only);
        assert!(field(&fields, "created_at").read_only);
        assert!(field(&fields, "code").read_only);
        assert!(field(&fields, "notes").read_only);
        assert!(!field(&fields, "name").read_only);
        assert!(field(&fields, "name").required);
        assert_eq!(field(&fields, "notes").field_type, FieldType::String);
    }

    #[test]
    fn test_client_model() {
        let model = model_schema::<Client>();
        assert_eq!(model.path, "/api/client/");
        assert_eq!(model.primary_key, "client_id");

        let names: Vec<&str> = model.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["client_id", "name", "email", "phone", "address", "created_at"]);
        assert_eq!(field(&model.fields, "name").max_length, Some(80));
    }

    #[test]
    fn test_document_lists_every_entity() {
        let document = api_document();
        let names: Vec<&str> = document.models.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec![
                "Client",
                "Employee",
                "Invoice",
                "InvoiceItem",
                "Setting",
                "Task",
                "Vehicle",
                "Work"
            ]
        );
        assert!(!field(&document.models["Invoice"].fields, "issued_at").required);
    }

    #[test]
    fn test_field_type_serialization() {
        let json = serde_json::to_value(FieldType::DateTime).unwrap();
        assert_eq!(json, serde_json::json!("date-time"));
    }
}
