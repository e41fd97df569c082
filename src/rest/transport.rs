/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::{HttpMethod, SignedRequest};
use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use std::sync::Arc;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes a single signed request.
///
/// Implementations must not retry, any failure goes straight back to the caller as
/// [FlickrError::Network]. Deadlines belong here too (e.g. a `reqwest::Client` built with a
/// timeout).
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: SignedRequest,
    ) -> impl Future<Output = Result<RawResponse, FlickrError>> + Send;
}

impl Transport for reqwest::Client {
    async fn execute(&self, request: SignedRequest) -> Result<RawResponse, FlickrError> {
        let query = request.query_string();
        let builder = match (request.method, request.binary) {
            (HttpMethod::Get, _) => {
                let url = if query.is_empty() {
                    request.url
                } else {
                    format!("{}?{}", request.url, query)
                };
                self.get(url)
            }
            (HttpMethod::Post, None) => self
                .post(request.url)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(query),
            (HttpMethod::Post, Some(binary)) => {
                let form = request
                    .params
                    .into_iter()
                    .fold(Form::new(), |form, (name, value)| form.text(name, value));
                let part = Part::bytes(binary.data.to_vec())
                    .file_name(binary.file_name)
                    .mime_str(&binary.content_type)
                    .map_err(|_| {
                        FlickrError::InvalidArgument(format!(
                            "bad content type `{}` for part `{}`",
                            binary.content_type, binary.name
                        ))
                    })?;
                self.post(request.url).multipart(form.part(binary.name, part))
            }
        };

        let resp = builder.header(ACCEPT, "application/json").send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;
        Ok(RawResponse { status, body })
    }
}

impl<T: Transport> Transport for Arc<T> {
    fn execute(
        &self,
        request: SignedRequest,
    ) -> impl Future<Output = Result<RawResponse, FlickrError>> + Send {
        self.as_ref().execute(request)
    }
}
