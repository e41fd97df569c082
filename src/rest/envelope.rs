/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::{DecodeError, FlickrError};
use crate::rest::parsers::{Fields, JsonObject};
use num_enum::{FromPrimitive, IntoPrimitive};
use serde_json::Value;
use std::fmt;

const ENVELOPE: &str = "Envelope";
const UPLOAD_ENVELOPE: &str = "UploadEnvelope";

/// Error codes per the Flickr API docs.
///
/// Codes below 95 are method specific, of those only "not found" is common enough to be named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub enum ErrorCode {
    NotFound = 1,
    SslRequired = 95,
    InvalidSignature = 96,
    MissingSignature = 97,
    LoginFailed = 98,
    PermissionDenied = 99,
    InvalidApiKey = 100,
    ServiceUnavailable = 105,
    WriteOperationFailed = 106,
    FormatNotFound = 111,
    MethodNotFound = 112,
    InvalidSoapEnvelope = 114,
    InvalidXmlRpcCall = 115,
    BadUrlFound = 116,
    #[num_enum(catch_all)]
    Unknown(u32),
}

impl ErrorCode {
    /// The raw code as sent by Flickr
    pub fn code(&self) -> u32 {
        u32::from(*self)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Unknown(code) => write!(f, "{code}"),
            known => write!(f, "{} ({known:?})", known.code()),
        }
    }
}

/// The top level wrapper of every response
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    Success(JsonObject),
    Failure { code: ErrorCode, message: String },
}

impl Envelope {
    /// Parses a JSON response body (`{"stat": "ok" | "fail", ...}`)
    pub fn parse(body: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| DecodeError::new(ENVELOPE, "<body>", format!("invalid JSON: {e}")))?;
        let Value::Object(json) = value else {
            return Err(DecodeError::wrong_type(ENVELOPE, "<body>", "object"));
        };

        let fields = Fields::new(ENVELOPE, &json);
        match fields.string("stat")?.as_str() {
            "ok" => Ok(Envelope::Success(json)),
            "fail" => {
                let code = fields.uint("code")?;
                let message = fields.string("message")?;
                Ok(Envelope::Failure {
                    code: ErrorCode::from(code),
                    message,
                })
            }
            other => Err(DecodeError::new(
                ENVELOPE,
                "stat",
                format!("unexpected status `{other}`"),
            )),
        }
    }

    /// Parses the response of the upload endpoint.
    ///
    /// It is not JSON but a small XML document:
    /// `<rsp stat="ok"><photoid>1234</photoid></rsp>` or
    /// `<rsp stat="fail"><err code="5" msg="Filetype was not recognised" /></rsp>`.
    /// A success is turned into `{"photoid": "1234"}` so it can be decoded like any other payload.
    pub fn parse_upload(body: &[u8]) -> Result<Self, DecodeError> {
        let body = std::str::from_utf8(body)
            .map_err(|e| DecodeError::new(UPLOAD_ENVELOPE, "<body>", e.to_string()))?;
        let rsp = element_attrs(body, "rsp")
            .ok_or_else(|| DecodeError::missing(UPLOAD_ENVELOPE, "rsp"))?;
        let stat = attribute(rsp, "stat")
            .ok_or_else(|| DecodeError::missing(UPLOAD_ENVELOPE, "stat"))?;

        match stat {
            "ok" => {
                let photo_id = element_text(body, "photoid")
                    .ok_or_else(|| DecodeError::missing(UPLOAD_ENVELOPE, "photoid"))?;
                let mut json = JsonObject::new();
                json.insert("photoid".into(), Value::String(photo_id.trim().to_string()));
                Ok(Envelope::Success(json))
            }
            "fail" => {
                let err = element_attrs(body, "err")
                    .ok_or_else(|| DecodeError::missing(UPLOAD_ENVELOPE, "err"))?;
                let code = attribute(err, "code")
                    .ok_or_else(|| DecodeError::missing(UPLOAD_ENVELOPE, "code"))?
                    .parse::<u32>()
                    .map_err(|_| DecodeError::wrong_type(UPLOAD_ENVELOPE, "code", "integer"))?;
                let message = attribute(err, "msg")
                    .ok_or_else(|| DecodeError::missing(UPLOAD_ENVELOPE, "msg"))?;
                Ok(Envelope::Failure {
                    code: ErrorCode::from(code),
                    message: message.to_string(),
                })
            }
            other => Err(DecodeError::new(
                UPLOAD_ENVELOPE,
                "stat",
                format!("unexpected status `{other}`"),
            )),
        }
    }

    /// Turns a failure into [FlickrError::RemoteService]
    pub fn into_result(self) -> Result<JsonObject, FlickrError> {
        match self {
            Envelope::Success(json) => Ok(json),
            Envelope::Failure { code, message } => {
                Err(FlickrError::RemoteService { code, message })
            }
        }
    }
}

// Attribute section of the first `<name ...>` tag, and whatever follows the tag
fn open_tag<'a>(doc: &'a str, name: &str) -> Option<(&'a str, &'a str)> {
    let open = format!("<{name}");
    let mut rest = doc;
    while let Some(idx) = rest.find(&open) {
        let after = &rest[idx + open.len()..];
        // Make sure `<rsp` did not match `<rspfoo`
        if after.starts_with(|c: char| c.is_whitespace() || c == '>' || c == '/') {
            let end = tag_end(after)?;
            return Some((&after[..end], &after[end + 1..]));
        }
        rest = after;
    }
    None
}

// Position of the `>` closing a tag. Quoted attribute values may contain `>` themselves.
fn tag_end(tag: &str) -> Option<usize> {
    let mut quote = None;
    for (idx, c) in tag.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if q == c => quote = None,
            (None, '>') => return Some(idx),
            _ => {}
        }
    }
    None
}

fn element_attrs<'a>(doc: &'a str, name: &str) -> Option<&'a str> {
    open_tag(doc, name).map(|(attrs, _)| attrs.trim_end_matches('/'))
}

// Text between `<name ...>` and `</name>`, a self closing tag has none
fn element_text<'a>(doc: &'a str, name: &str) -> Option<&'a str> {
    let (attrs, rest) = open_tag(doc, name)?;
    if attrs.ends_with('/') {
        return None;
    }
    let end = rest.find(&format!("</{name}>"))?;
    Some(&rest[..end])
}

fn attribute<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let mut rest = attrs;
    loop {
        let eq = rest.find('=')?;
        let key = rest[..eq].trim();
        let value = rest[eq + 1..].trim_start();
        let quote = value.chars().next().filter(|c| *c == '"' || *c == '\'')?;
        let end = value[1..].find(quote)? + 1;
        if key == name {
            return Some(&value[1..end]);
        }
        rest = &value[end + 1..];
    }
}
