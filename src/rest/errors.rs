/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::rest::ErrorCode;
use std::borrow::Cow;
use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum FlickrError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Request network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("API Response is malformed: {0}")]
    MalformedResponse(#[from] DecodeError),

    #[error("API Response was error: {code}, msg: {message}")]
    RemoteService { code: ErrorCode, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl FlickrError {
    /// The remote error code when this is a failure reported by Flickr itself
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            FlickrError::RemoteService { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FlickrError {
    fn from(err: reqwest::Error) -> Self {
        FlickrError::Network(Box::new(err))
    }
}

impl From<url::ParseError> for FlickrError {
    fn from(err: url::ParseError) -> Self {
        FlickrError::InvalidArgument(format!("bad url: {err}"))
    }
}

/// A response (or part of one) did not have the expected shape.
///
/// Carries the kind of entity being decoded and the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{entity}.{field}: {reason}")]
pub struct DecodeError {
    pub entity: &'static str,
    pub field: Cow<'static, str>,
    pub reason: String,
}

impl DecodeError {
    pub fn new(
        entity: &'static str,
        field: impl Into<Cow<'static, str>>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            entity,
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn missing(entity: &'static str, field: impl Into<Cow<'static, str>>) -> Self {
        Self::new(entity, field, "missing")
    }

    pub(crate) fn wrong_type(
        entity: &'static str,
        field: impl Into<Cow<'static, str>>,
        expected: &str,
    ) -> Self {
        Self::new(entity, field, format!("expected {expected}"))
    }
}
