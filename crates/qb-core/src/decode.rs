//! Decoding of raw schema records into typed intermediates.
//!
//! The metadata service hands out loosely-typed JSON-LD style maps. This
//! module pulls the well-known keys out of them once, so the model layer
//! only ever sees [`RawType`] and [`RawProperty`].
//!
//! Non-object entries inside collections are skipped. A field holding a
//! value of the wrong shape is reported as [`QbError::Decode`].

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{QbError, QbResult};
use crate::schema;

type Record = Map<String, Value>;

/// A property or incoming-link entry of a type record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawProperty {
    pub id: String,
    pub name: Option<String>,
    pub target_types: Option<Vec<String>>,
    pub source_types: Option<Vec<String>>,
    pub name_for_reverse_link: Option<String>,
}

impl RawProperty {
    /// Decode a single property record.
    pub fn from_record(record: &Record) -> QbResult<Self> {
        Ok(Self {
            id: required_str(record, schema::IDENTIFIER)?,
            name: optional_str(record, schema::NAME)?,
            target_types: type_refs(record, schema::META_TARGET_TYPES)?,
            source_types: type_refs(record, schema::META_SOURCE_TYPES)?,
            name_for_reverse_link: optional_str(record, schema::META_NAME_REVERSE_LINK)?,
        })
    }
}

/// A type record with its outgoing properties and incoming links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawType {
    pub id: String,
    pub name: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
    pub properties: Vec<RawProperty>,
    pub incoming_links: Vec<RawProperty>,
}

impl RawType {
    /// Decode a type record from an arbitrary JSON value.
    pub fn from_value(value: &Value) -> QbResult<Self> {
        let record = value
            .as_object()
            .ok_or_else(|| QbError::decode("type", format!("expected object, found {}", kind(value))))?;
        Self::from_record(record)
    }

    /// Decode a type record.
    pub fn from_record(record: &Record) -> QbResult<Self> {
        let properties = records(record, schema::META_PROPERTIES)?
            .into_iter()
            .map(RawProperty::from_record)
            .collect::<QbResult<Vec<_>>>()?;

        let incoming_links = records(record, schema::META_INCOMING_LINKS)?
            .into_iter()
            .map(RawProperty::from_record)
            .collect::<QbResult<Vec<_>>>()?;

        Ok(Self {
            id: required_str(record, schema::IDENTIFIER)?,
            name: optional_str(record, schema::NAME)?,
            color: optional_str(record, schema::META_COLOR)?,
            description: optional_str(record, schema::DESCRIPTION)?,
            properties,
            incoming_links,
        })
    }
}

/// Extract the list of type records from an upstream response body.
///
/// Accepts either a bare array or an object wrapping the array in `data`.
pub fn type_records(body: &Value) -> QbResult<&[Value]> {
    match body {
        Value::Array(items) => Ok(items),
        Value::Object(map) => match map.get("data") {
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(QbError::decode("data", format!("expected array, found {}", kind(other)))),
            None => Err(QbError::decode("data", "missing")),
        },
        other => Err(QbError::decode("types", format!("expected array or object, found {}", kind(other)))),
    }
}

fn required_str(record: &Record, field: &str) -> QbResult<String> {
    optional_str(record, field)?.ok_or_else(|| QbError::decode(field, "missing"))
}

fn optional_str(record: &Record, field: &str) -> QbResult<Option<String>> {
    match record.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(QbError::decode(field, format!("expected string, found {}", kind(other)))),
    }
}

/// Object entries of a collection field. Missing or null means empty.
fn records<'a>(record: &'a Record, field: &str) -> QbResult<Vec<&'a Record>> {
    let items = match record.get(field) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(QbError::decode(field, format!("expected array, found {}", kind(other))));
        }
    };

    Ok(items
        .iter()
        .filter_map(|item| {
            let entry = item.as_object();
            if entry.is_none() {
                debug!(field, found = kind(item), "Skipping non-object collection entry");
            }
            entry
        })
        .collect())
}

/// Type identifiers of a target/source type list, in source order.
fn type_refs(record: &Record, field: &str) -> QbResult<Option<Vec<String>>> {
    let items = match record.get(field) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(QbError::decode(field, format!("expected array, found {}", kind(other))));
        }
    };

    let refs = items
        .iter()
        .filter_map(|item| {
            let type_id = item
                .get(schema::META_TYPE)
                .and_then(Value::as_str)
                .map(str::to_string);
            if type_id.is_none() {
                debug!(field, "Skipping type reference without type identifier");
            }
            type_id
        })
        .collect();

    Ok(Some(refs))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
