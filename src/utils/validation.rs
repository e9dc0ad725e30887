//! Utilidades de validación
//!
//! Coerción de payloads JSON a valores de columna siguiendo la tabla de
//! columnas de cada entidad. Todos los problemas se acumulan en un único
//! `ValidationErrors` para devolver un 400 completo.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SubsecRound};
use serde_json::{Map, Value};
use validator::{ValidationError, ValidationErrors};

use crate::models::{Column, FieldValue, FieldValues, SqlType};
use crate::utils::errors::{AppError, AppResult};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Coerciona el payload de un POST.
///
/// Toda columna requerida debe venir y no ser `null`; las opcionales ausentes
/// se guardan como NULL. Las columnas de solo lectura y las claves
/// desconocidas se ignoran.
pub fn parse_create(columns: &'static [Column], body: &Value) -> AppResult<FieldValues> {
    let object = as_object(body)?;
    let mut values = Vec::new();
    let mut errors = ValidationErrors::new();

    for column in columns.iter().filter(|c| c.is_writable()) {
        match object.get(column.name) {
            None | Some(Value::Null) if column.is_required() => {
                errors.add(column.name, missing_field());
            }
            None | Some(Value::Null) => {
                if !column.defaults_to_now {
                    values.push((column.name, FieldValue::Null));
                }
            }
            Some(value) => match coerce(column, value) {
                Ok(v) => values.push((column.name, v)),
                Err(e) => errors.add(column.name, e),
            },
        }
    }

    finish(values, errors)
}

/// Coerciona el payload de un PUT con semántica de parche: solo se escriben
/// las claves presentes y distintas de `null`, incluidos `""` y `0`.
pub fn parse_patch(columns: &'static [Column], body: &Value) -> AppResult<FieldValues> {
    let object = as_object(body)?;
    let mut values = Vec::new();
    let mut errors = ValidationErrors::new();

    for column in columns.iter().filter(|c| c.is_writable()) {
        match object.get(column.name) {
            None | Some(Value::Null) => {}
            Some(value) => match coerce(column, value) {
                Ok(v) => values.push((column.name, v)),
                Err(e) => errors.add(column.name, e),
            },
        }
    }

    finish(values, errors)
}

fn as_object(body: &Value) -> AppResult<&Map<String, Value>> {
    body.as_object()
        .ok_or_else(|| AppError::BadRequest("Request body must be a JSON object.".to_string()))
}

fn finish(values: FieldValues, errors: ValidationErrors) -> AppResult<FieldValues> {
    if errors.is_empty() {
        Ok(values)
    } else {
        Err(AppError::Validation(errors))
    }
}

/// Convierte un valor JSON al tipo de la columna
fn coerce(column: &Column, value: &Value) -> Result<FieldValue, ValidationError> {
    match column.sql_type {
        SqlType::Integer => value
            .as_i64()
            .map(FieldValue::Integer)
            .ok_or_else(|| type_error("integer", value)),
        SqlType::Float => value
            .as_f64()
            .map(FieldValue::Float)
            .ok_or_else(|| type_error("number", value)),
        SqlType::Boolean => value
            .as_bool()
            .map(FieldValue::Boolean)
            .ok_or_else(|| type_error("boolean", value)),
        SqlType::Date => {
            let raw = value.as_str().ok_or_else(|| type_error("date string", value))?;
            validate_date(raw).map(FieldValue::Date)
        }
        SqlType::DateTime => {
            let raw = value
                .as_str()
                .ok_or_else(|| type_error("date-time string", value))?;
            validate_datetime(raw).map(FieldValue::DateTime)
        }
        SqlType::Text | SqlType::Other(_) => {
            let raw = value.as_str().ok_or_else(|| type_error("string", value))?;
            if let Some(max) = column.max_length {
                validate_length(raw, max)?;
            }
            Ok(FieldValue::Text(raw.to_string()))
        }
    }
}

fn missing_field() -> ValidationError {
    let mut error = ValidationError::new("required");
    error.message = Some("missing required field".into());
    error
}

fn type_error(expected: &str, value: &Value) -> ValidationError {
    let mut error = ValidationError::new("type");
    error.add_param("expected".into(), &expected);
    error.add_param("value".into(), value);
    error.message = Some(format!("expected {}", expected).into());
    error
}

/// Validar y convertir string a fecha (`YYYY-MM-DD`)
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error.message = Some("expected a date in YYYY-MM-DD format".into());
        error
    })
}

/// Validar y convertir string a datetime UTC, truncado a segundos.
///
/// Acepta RFC 3339 (se normaliza a UTC) o una fecha y hora sin zona, que se
/// asume UTC.
pub fn validate_datetime(value: &str) -> Result<NaiveDateTime, ValidationError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_utc().trunc_subsecs(0));
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|dt| dt.trunc_subsecs(0))
        .ok_or_else(|| {
            let mut error = ValidationError::new("datetime");
            error.add_param("value".into(), &value.to_string());
            error.add_param("format".into(), &"RFC3339".to_string());
            error.message = Some("expected a date-time such as 2024-01-31T09:30:00".into());
            error
        })
}

/// Validar longitud máxima en caracteres
pub fn validate_length(value: &str, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max {
        let mut error = ValidationError::new("length");
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        error.message = Some(format!("must be at most {} characters", max).into());
        return Err(error);
    }
    Ok(())
}
