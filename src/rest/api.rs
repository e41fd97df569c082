/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::{DecodeError, FlickrError};
use crate::rest::oauth::sign;
use crate::rest::parsers::JsonObject;
use crate::rest::transport::{RawResponse, Transport};
use crate::rest::{ArgumentSet, Envelope, HttpMethod, UploadedPhoto};

// Root Flickr REST endpoint
pub const REST_ENDPOINT: &str = "https://api.flickr.com/services/rest";

// Photo upload endpoint, answers in XML rather than JSON
pub const UPLOAD_ENDPOINT: &str = "https://up.flickr.com/services/upload";

/// Decodes the payload of a successful response into a typed value.
///
/// Each service call names the response type it expects, the dispatch code takes care of
/// everything around it.
pub trait ApiResponse: Sized {
    fn decode(payload: &JsonObject) -> Result<Self, DecodeError>;
}

/// For calls where only success or failure matters
impl ApiResponse for () {
    fn decode(_payload: &JsonObject) -> Result<Self, DecodeError> {
        Ok(())
    }
}

/// Where requests are sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub rest: String,
    pub upload: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            rest: REST_ENDPOINT.to_string(),
            upload: UPLOAD_ENDPOINT.to_string(),
        }
    }
}

/// Directly communicates with the API.
///
/// Signs, sends and unwraps the envelope of every request made by the services.
pub struct ApiClient<T = reqwest::Client> {
    creds: Creds,
    endpoints: Endpoints,
    transport: T,
}

impl ApiClient {
    /// Creates a new Flickr client instance from provided tokens
    pub fn new(creds: Creds) -> Self {
        Self::with_transport(creds, reqwest::Client::new())
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(creds: Creds, transport: T) -> Self {
        Self {
            creds,
            endpoints: Endpoints::default(),
            transport,
        }
    }

    /// Replaces the endpoints requests are sent to
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn creds(&self) -> &Creds {
        &self.creds
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Calls a REST method with a GET request
    pub async fn do_get<R: ApiResponse>(&self, args: ArgumentSet) -> Result<R, FlickrError> {
        let payload = self
            .call(HttpMethod::Get, &self.endpoints.rest, args, Envelope::parse)
            .await?;
        Ok(R::decode(&payload)?)
    }

    /// Calls a REST method with a POST request
    pub async fn do_post<R: ApiResponse>(&self, args: ArgumentSet) -> Result<R, FlickrError> {
        let payload = self
            .call(HttpMethod::Post, &self.endpoints.rest, args, Envelope::parse)
            .await?;
        Ok(R::decode(&payload)?)
    }

    /// Posts to the upload endpoint, whose response has its own envelope format
    pub async fn do_upload(&self, args: ArgumentSet) -> Result<UploadedPhoto, FlickrError> {
        let payload = self
            .call(
                HttpMethod::Post,
                &self.endpoints.upload,
                args,
                Envelope::parse_upload,
            )
            .await?;
        Ok(UploadedPhoto::decode(&payload)?)
    }

    async fn call(
        &self,
        method: HttpMethod,
        url: &str,
        mut args: ArgumentSet,
        parse: fn(&[u8]) -> Result<Envelope, DecodeError>,
    ) -> Result<JsonObject, FlickrError> {
        if args.method().is_some() {
            args.put("format", "json")?.put("nojsoncallback", 1)?;
        }
        log::debug!("{method} {}", args.method().unwrap_or(url));

        let request = sign(&self.creds, method, url, &args)?;
        let resp = self.transport.execute(request).await?;
        log::trace!("{} -> {}", resp.status, String::from_utf8_lossy(&resp.body));

        match parse(&resp.body) {
            Ok(envelope) => envelope.into_result().inspect_err(|err| {
                log::warn!("{} failed: {err}", args.method().unwrap_or(url));
            }),
            Err(err) => {
                log::warn!("Api Malformed Err {err}");
                Err(malformed(&resp, err).into())
            }
        }
    }
}

// An HTTP error status usually explains why the body could not be parsed
fn malformed(resp: &RawResponse, err: DecodeError) -> DecodeError {
    if resp.is_success() {
        err
    } else {
        DecodeError {
            reason: format!("HTTP status {}: {}", resp.status, err.reason),
            ..err
        }
    }
}

impl<T> std::fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("creds", &self.creds)
            .field("endpoints", &self.endpoints)
            .finish()
    }
}

/// OAuth1 credentials.
///
/// Without an access token/secret only calls that need no user authorization will succeed.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Creds {
    consumer_key: String,
    consumer_secret: String,
    access_token: Option<String>,
    token_secret: Option<String>,
}

impl Creds {
    pub fn from_tokens(
        consumer_key: &str,
        consumer_secret: &str,
        access_token: Option<&str>,
        token_secret: Option<&str>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.map(Into::into),
            token_secret: token_secret.map(Into::into),
        }
    }

    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    pub fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn token_secret(&self) -> Option<&str> {
        self.token_secret.as_deref()
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("consumer_key", &"xxx")
            .field("consumer_secret", &"xxx")
            .field("access_token", &self.access_token.as_ref().map(|_| "xxx"))
            .field("token_secret", &self.token_secret.as_ref().map(|_| "xxx"))
            .finish()
    }
}
