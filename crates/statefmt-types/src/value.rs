use crate::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;

/// A decoded attribute value.
///
/// `Map` and `Object` are backed by an unordered map: anything that turns a
/// value into text has to sort the keys first.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    String(String),
    Number(serde_json::Number),
    Bool(bool),
    List(Vec<Value>),
    Set(Vec<Value>),
    Tuple(Vec<Value>),
    Map(HashMap<String, Value>),
    Object(HashMap<String, Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    pub fn number(n: impl Into<serde_json::Number>) -> Self {
        Value::Number(n.into())
    }

    /// Build an object from `(name, value)` pairs
    pub fn object<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Object(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a map from `(key, value)` pairs
    pub fn map<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Look up an attribute of an object, treating anything else as null.
    pub fn get_attr(&self, name: &str) -> &Value {
        match self {
            Value::Object(fields) => fields.get(name).unwrap_or(&Value::Null),
            _ => &Value::Null,
        }
    }

    /// Infer a value from untyped JSON: objects become objects and arrays
    /// become tuples, since nothing says their elements share a type.
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => Value::Number(n.clone()),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::Tuple(items.iter().map(Value::from_json).collect())
            }
            serde_json::Value::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Convert to loosely-typed JSON, dropping the collection kind.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Number(n) => serde_json::Value::Number(n.clone()),
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::List(items) | Value::Set(items) | Value::Tuple(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Map(entries) | Value::Object(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

/// Declared shape of an attribute, written in the JSON type constraint
/// notation: `"string"`, `["list","number"]`, `["object",{"a":"bool"}]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub enum AttrType {
    String,
    Number,
    Bool,
    /// Any shape; the decoder infers it from the payload
    Dynamic,
    List(Box<AttrType>),
    Set(Box<AttrType>),
    Map(Box<AttrType>),
    Object(Vec<(String, AttrType)>),
    Tuple(Vec<AttrType>),
}

impl AttrType {
    pub fn list(element: AttrType) -> Self {
        AttrType::List(Box::new(element))
    }

    pub fn set(element: AttrType) -> Self {
        AttrType::Set(Box::new(element))
    }

    pub fn map(element: AttrType) -> Self {
        AttrType::Map(Box::new(element))
    }

    /// Short name used in decode error messages
    pub fn friendly_name(&self) -> &'static str {
        match self {
            AttrType::String => "string",
            AttrType::Number => "number",
            AttrType::Bool => "bool",
            AttrType::Dynamic => "any value",
            AttrType::List(_) => "list",
            AttrType::Set(_) => "set",
            AttrType::Map(_) => "map",
            AttrType::Object(_) => "object",
            AttrType::Tuple(_) => "tuple",
        }
    }
}

impl TryFrom<serde_json::Value> for AttrType {
    type Error = Error;

    fn try_from(json: serde_json::Value) -> Result<Self> {
        AttrType::from_json(&json)
    }
}

impl AttrType {
    pub fn from_json(json: &serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::String(name) => match name.as_str() {
                "string" => Ok(AttrType::String),
                "number" => Ok(AttrType::Number),
                "bool" => Ok(AttrType::Bool),
                "dynamic" => Ok(AttrType::Dynamic),
                other => Err(Error::Type(format!("unknown primitive type {:?}", other))),
            },
            serde_json::Value::Array(parts) => {
                let [kind, inner] = parts.as_slice() else {
                    return Err(Error::Type(format!(
                        "expected [kind, element], got {} items",
                        parts.len()
                    )));
                };
                match kind.as_str() {
                    Some("list") => Ok(AttrType::list(AttrType::from_json(inner)?)),
                    Some("set") => Ok(AttrType::set(AttrType::from_json(inner)?)),
                    Some("map") => Ok(AttrType::map(AttrType::from_json(inner)?)),
                    Some("object") => {
                        let fields = inner.as_object().ok_or_else(|| {
                            Error::Type("object type needs a map of attribute types".to_string())
                        })?;
                        let fields = fields
                            .iter()
                            .map(|(name, ty)| Ok((name.clone(), AttrType::from_json(ty)?)))
                            .collect::<Result<Vec<_>>>()?;
                        Ok(AttrType::Object(fields))
                    }
                    Some("tuple") => {
                        let elements = inner.as_array().ok_or_else(|| {
                            Error::Type("tuple type needs a list of element types".to_string())
                        })?;
                        let elements = elements
                            .iter()
                            .map(AttrType::from_json)
                            .collect::<Result<Vec<_>>>()?;
                        Ok(AttrType::Tuple(elements))
                    }
                    _ => Err(Error::Type(format!("unknown collection kind {}", kind))),
                }
            }
            other => Err(Error::Type(format!("unexpected type notation {}", other))),
        }
    }
}
