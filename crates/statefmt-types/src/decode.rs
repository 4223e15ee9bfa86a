// Decoding of stored instance attributes into structured values.
// The stored form is plain JSON; the schema's implied type decides how each
// JSON node is read (a JSON array may be a list, a set or a tuple).

use crate::{AttrType, Value};
use std::collections::HashMap;
use std::fmt;

/// Opaque attribute payload of a stored instance (JSON text).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EncodedAttributes(String);

impl EncodedAttributes {
    pub fn new(json: impl Into<String>) -> Self {
        Self(json.into())
    }

    pub fn from_json(json: &serde_json::Value) -> Self {
        Self(json.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Why an attribute payload does not fit its type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    /// Attribute path of the offending node, e.g. `.tags["env"]`; empty
    /// when the payload as a whole is unreadable.
    pub path: String,
    pub message: String,
}

impl DecodeError {
    fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for DecodeError {}

/// Turns an encoded payload into a value of the given type.
pub trait AttributeDecoder {
    fn decode(&self, encoded: &EncodedAttributes, ty: &AttrType) -> Result<Value, DecodeError>;
}

/// Decoder for JSON payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl AttributeDecoder for JsonDecoder {
    fn decode(&self, encoded: &EncodedAttributes, ty: &AttrType) -> Result<Value, DecodeError> {
        let json: serde_json::Value = serde_json::from_str(encoded.as_str())
            .map_err(|err| DecodeError::new("", format!("invalid JSON: {}", err)))?;
        conform(&json, ty, "")
    }
}

fn conform(json: &serde_json::Value, ty: &AttrType, path: &str) -> Result<Value, DecodeError> {
    use serde_json::Value as Json;

    if json.is_null() {
        return Ok(Value::Null);
    }

    match (ty, json) {
        (AttrType::Dynamic, _) => Ok(Value::from_json(json)),

        (AttrType::String, Json::String(s)) => Ok(Value::String(s.clone())),
        (AttrType::String, Json::Number(n)) => Ok(Value::String(n.to_string())),
        (AttrType::String, Json::Bool(b)) => Ok(Value::String(b.to_string())),

        (AttrType::Number, Json::Number(n)) => Ok(Value::Number(n.clone())),
        (AttrType::Number, Json::String(s)) => s
            .parse::<serde_json::Number>()
            .map(Value::Number)
            .map_err(|_| DecodeError::new(path, format!("a number is required, got {:?}", s))),

        (AttrType::Bool, Json::Bool(b)) => Ok(Value::Bool(*b)),
        (AttrType::Bool, Json::String(s)) if s == "true" || s == "false" => {
            Ok(Value::Bool(s == "true"))
        }

        (AttrType::List(element), Json::Array(items)) => {
            conform_elements(items, element, path).map(Value::List)
        }
        (AttrType::Set(element), Json::Array(items)) => {
            conform_elements(items, element, path).map(Value::Set)
        }
        (AttrType::Tuple(elements), Json::Array(items)) => {
            if elements.len() != items.len() {
                return Err(DecodeError::new(
                    path,
                    format!(
                        "tuple required with {} elements, got {}",
                        elements.len(),
                        items.len()
                    ),
                ));
            }
            items
                .iter()
                .zip(elements)
                .enumerate()
                .map(|(i, (item, ty))| conform(item, ty, &format!("{}[{}]", path, i)))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Tuple)
        }

        (AttrType::Map(element), Json::Object(entries)) => entries
            .iter()
            .map(|(key, item)| {
                let item_path = format!("{}[{:?}]", path, key);
                Ok((key.clone(), conform(item, element, &item_path)?))
            })
            .collect::<Result<HashMap<_, _>, DecodeError>>()
            .map(Value::Map),

        (AttrType::Object(fields), Json::Object(entries)) => {
            if let Some(extra) = entries
                .keys()
                .find(|key| !fields.iter().any(|(name, _)| name == *key))
            {
                return Err(DecodeError::new(
                    path,
                    format!("unsupported attribute {:?}", extra),
                ));
            }
            fields
                .iter()
                .map(|(name, ty)| {
                    let field_path = format!("{}.{}", path, name);
                    let item = entries.get(name).unwrap_or(&Json::Null);
                    Ok((name.clone(), conform(item, ty, &field_path)?))
                })
                .collect::<Result<HashMap<_, _>, DecodeError>>()
                .map(Value::Object)
        }

        (ty, _) => Err(DecodeError::new(
            path,
            format!("{} required, got {}", ty.friendly_name(), json_kind(json)),
        )),
    }
}

fn conform_elements(
    items: &[serde_json::Value],
    element: &AttrType,
    path: &str,
) -> Result<Vec<Value>, DecodeError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| conform(item, element, &format!("{}[{}]", path, i)))
        .collect()
}

fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
