/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use bytes::Bytes;
use std::fmt;

/// A single (non binary) parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Text(String),
    Int(i64),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Text(v) => f.write_str(v),
            ArgValue::Int(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(v: &str) -> Self {
        ArgValue::Text(v.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(v: String) -> Self {
        ArgValue::Text(v)
    }
}

impl From<&String> for ArgValue {
    fn from(v: &String) -> Self {
        ArgValue::Text(v.clone())
    }
}

macro_rules! arg_value_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for ArgValue {
            fn from(v: $t) -> Self {
                ArgValue::Int(v as i64)
            }
        })*
    };
}

arg_value_from_int!(u8, u16, u32, i32, i64);

/// The file part of a multipart request.
///
/// Only the presence of this part matters to the request signature, its bytes are never signed.
#[derive(Clone)]
pub struct BinaryPart {
    pub name: String,
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl fmt::Debug for BinaryPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryPart")
            .field("name", &self.name)
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.data.len())
            .finish()
    }
}

/// Parameters for one remote method invocation.
///
/// ```rust
/// use flickr::rest::ArgumentSet;
///
/// let mut args = ArgumentSet::new("flickr.photosets.getList");
/// args.put("user_id", "12345678@N00")?.put("page", 2)?;
/// assert_eq!(args.get("page").map(|v| v.to_string()), Some("2".to_string()));
/// # Ok::<(), flickr::rest::FlickrError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgumentSet {
    method: Option<String>,
    params: Vec<(String, ArgValue)>,
    binary: Option<BinaryPart>,
}

impl ArgumentSet {
    /// Arguments for a call to the named REST method
    pub fn new(method: &str) -> Self {
        Self {
            method: Some(method.to_string()),
            ..Default::default()
        }
    }

    /// Arguments for a call to a raw endpoint such as the upload url
    pub fn raw() -> Self {
        Self::default()
    }

    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// Inserts a parameter, overwriting (in place) any previous value with the same name.
    pub fn put(&mut self, name: &str, value: impl Into<ArgValue>) -> Result<&mut Self, FlickrError> {
        if name.is_empty() {
            return Err(FlickrError::InvalidArgument(
                "parameter name is empty".to_string(),
            ));
        }
        if self.binary.as_ref().is_some_and(|b| b.name == name)
            || (name == "method" && self.method.is_some())
        {
            return Err(FlickrError::InvalidArgument(format!(
                "parameter `{name}` is already in use"
            )));
        }

        let value = value.into();
        match self.params.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((name.to_string(), value)),
        }
        Ok(self)
    }

    /// Attaches the binary part, using the part name as the file name
    pub fn put_binary(
        &mut self,
        name: &str,
        data: impl Into<Bytes>,
        content_type: &str,
    ) -> Result<&mut Self, FlickrError> {
        self.put_binary_file(name, name, data, content_type)
    }

    /// Attaches the binary part. Multipart bodies carry a single file so this can only be done once.
    pub fn put_binary_file(
        &mut self,
        name: &str,
        file_name: &str,
        data: impl Into<Bytes>,
        content_type: &str,
    ) -> Result<&mut Self, FlickrError> {
        if name.is_empty() {
            return Err(FlickrError::InvalidArgument(
                "binary part name is empty".to_string(),
            ));
        }
        if let Some(existing) = &self.binary {
            return Err(FlickrError::InvalidArgument(format!(
                "binary part `{}` already set, only one is supported",
                existing.name
            )));
        }
        if self.get(name).is_some() {
            return Err(FlickrError::InvalidArgument(format!(
                "parameter `{name}` is already used by a text value"
            )));
        }

        self.binary = Some(BinaryPart {
            name: name.to_string(),
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            data: data.into(),
        });
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.params.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn binary(&self) -> Option<&BinaryPart> {
        self.binary.as_ref()
    }

    /// Every signable parameter as text, the method name first when there is one
    pub fn params(&self) -> Vec<(String, String)> {
        self.method
            .iter()
            .map(|m| ("method".to_string(), m.clone()))
            .chain(self.params.iter().map(|(n, v)| (n.clone(), v.to_string())))
            .collect()
    }
}
