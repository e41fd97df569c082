/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::DecodeError;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// A decoded JSON object, the input of every entity decoder
pub type JsonObject = Map<String, Value>;

/// Typed access to the fields of one JSON object.
///
/// Every error names the entity being decoded and the field that did not fit.
/// Flickr is loose with its scalar types (`"total": "42"`, `"farm": 5`), so numbers are accepted
/// as strings and the other way around.
#[derive(Clone, Copy)]
pub(crate) struct Fields<'a> {
    entity: &'static str,
    json: &'a JsonObject,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(entity: &'static str, json: &'a JsonObject) -> Self {
        Self { entity, json }
    }

    fn required(&self, name: &'static str) -> Result<&'a Value, DecodeError> {
        match self.json.get(name) {
            None | Some(Value::Null) => Err(DecodeError::missing(self.entity, name)),
            Some(v) => Ok(v),
        }
    }

    fn optional(&self, name: &'static str) -> Option<&'a Value> {
        self.json.get(name).filter(|v| !v.is_null())
    }

    /// Text field. Numbers are rendered as text, identifiers are never parsed.
    pub(crate) fn string(&self, name: &'static str) -> Result<String, DecodeError> {
        as_string(self.required(name)?)
            .ok_or_else(|| DecodeError::wrong_type(self.entity, name, "string"))
    }

    pub(crate) fn opt_string(&self, name: &'static str) -> Result<Option<String>, DecodeError> {
        self.optional(name)
            .map(|v| as_string(v).ok_or_else(|| DecodeError::wrong_type(self.entity, name, "string")))
            .transpose()
    }

    /// Text that is either a plain string or wrapped as `{"_content": "..."}`
    pub(crate) fn content(&self, name: &'static str) -> Result<String, DecodeError> {
        let value = self.required(name)?;
        let inner = match value {
            Value::Object(obj) => obj.get("_content").unwrap_or(&Value::Null),
            v => v,
        };
        as_string(inner).ok_or_else(|| DecodeError::wrong_type(self.entity, name, "text content"))
    }

    pub(crate) fn uint(&self, name: &'static str) -> Result<u32, DecodeError> {
        as_uint(self.required(name)?)
            .ok_or_else(|| DecodeError::wrong_type(self.entity, name, "non-negative integer"))
    }

    pub(crate) fn opt_uint(&self, name: &'static str) -> Result<Option<u32>, DecodeError> {
        self.optional(name)
            .map(|v| {
                as_uint(v)
                    .ok_or_else(|| DecodeError::wrong_type(self.entity, name, "non-negative integer"))
            })
            .transpose()
    }

    /// `0`/`1` flags, as numbers, strings or booleans. Absent means false.
    pub(crate) fn flag(&self, name: &'static str) -> Result<bool, DecodeError> {
        match self.optional(name) {
            None => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(v) => as_uint(v)
                .map(|n| n != 0)
                .ok_or_else(|| DecodeError::wrong_type(self.entity, name, "0 or 1")),
        }
    }

    /// Unix timestamp in seconds
    pub(crate) fn timestamp(&self, name: &'static str) -> Result<DateTime<Utc>, DecodeError> {
        to_datetime(self.entity, name, self.required(name)?)
    }

    pub(crate) fn opt_timestamp(
        &self,
        name: &'static str,
    ) -> Result<Option<DateTime<Utc>>, DecodeError> {
        self.optional(name)
            .map(|v| to_datetime(self.entity, name, v))
            .transpose()
    }

    /// An array field. Absent is `None`, anything other than an array is an error.
    pub(crate) fn opt_array(&self, name: &'static str) -> Result<Option<&'a Vec<Value>>, DecodeError> {
        match self.optional(name) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(_) => Err(DecodeError::wrong_type(self.entity, name, "array")),
        }
    }

    pub(crate) fn object(&self, name: &'static str) -> Result<&'a JsonObject, DecodeError> {
        match self.required(name)? {
            Value::Object(obj) => Ok(obj),
            _ => Err(DecodeError::wrong_type(self.entity, name, "object")),
        }
    }
}

fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn as_uint(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn to_datetime(
    entity: &'static str,
    name: &'static str,
    value: &Value,
) -> Result<DateTime<Utc>, DecodeError> {
    let secs = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    secs.and_then(|s| DateTime::from_timestamp(s, 0))
        .ok_or_else(|| DecodeError::wrong_type(entity, name, "unix timestamp"))
}

/// Decodes the object stored under `name`, the typical shape of a single entity response
pub fn decode_nested<T>(
    entity: &'static str,
    json: &JsonObject,
    name: &'static str,
    decode: impl FnOnce(&JsonObject) -> Result<T, DecodeError>,
) -> Result<T, DecodeError> {
    decode(Fields::new(entity, json).object(name)?)
}
