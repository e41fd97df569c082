/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! OAuth1 (HMAC-SHA1) request signing.
//!
//! See [RFC 5849 section 3.4](https://www.rfc-editor.org/rfc/rfc5849#section-3.4) for the
//! construction of the signature base string.

use crate::rest::errors::FlickrError;
use crate::rest::{ArgumentSet, BinaryPart, Creds, HttpMethod};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::borrow::Cow;

type HmacSha1 = Hmac<Sha1>;

pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
pub const OAUTH_VERSION: &str = "1.0";

/// The per request values that make a signature unique
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthNonce {
    pub nonce: String,
    pub timestamp: i64,
}

impl OAuthNonce {
    pub fn new(nonce: &str, timestamp: i64) -> Self {
        Self {
            nonce: nonce.to_string(),
            timestamp,
        }
    }

    /// Fresh random nonce stamped with the current time
    pub fn generate() -> Self {
        Self {
            nonce: format!("{:032x}", rand::random::<u128>()),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// A request with the OAuth protocol parameters and signature added.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub params: Vec<(String, String)>,
    pub binary: Option<BinaryPart>,
}

impl SignedRequest {
    /// All parameters percent encoded, as used for a GET query or a form body
    pub fn query_string(&self) -> String {
        self.params
            .iter()
            .map(|(n, v)| format!("{}={}", encode(n), encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn signature(&self) -> Option<&str> {
        self.param("oauth_signature")
    }
}

/// Signs the arguments with a freshly generated nonce and timestamp
pub fn sign(
    creds: &Creds,
    method: HttpMethod,
    url: &str,
    args: &ArgumentSet,
) -> Result<SignedRequest, FlickrError> {
    sign_with(creds, method, url, args, &OAuthNonce::generate())
}

/// Signs the arguments using the provided nonce and timestamp.
///
/// The output depends only on the inputs, which is what makes signatures testable.
pub fn sign_with(
    creds: &Creds,
    method: HttpMethod,
    url: &str,
    args: &ArgumentSet,
    nonce: &OAuthNonce,
) -> Result<SignedRequest, FlickrError> {
    let mut base_url = url::Url::parse(url)?;
    base_url.set_query(None);
    base_url.set_fragment(None);

    let mut params = args.params();
    params.push(("oauth_consumer_key".into(), creds.consumer_key().into()));
    params.push(("oauth_nonce".into(), nonce.nonce.clone()));
    params.push(("oauth_signature_method".into(), SIGNATURE_METHOD.into()));
    params.push(("oauth_timestamp".into(), nonce.timestamp.to_string()));
    if let Some(token) = creds.access_token() {
        params.push(("oauth_token".into(), token.into()));
    }
    params.push(("oauth_version".into(), OAUTH_VERSION.into()));

    let base_string = signature_base_string(method, base_url.as_str(), &params);
    let key = format!(
        "{}&{}",
        encode(creds.consumer_secret()),
        encode(creds.token_secret().unwrap_or(""))
    );
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| FlickrError::InvalidArgument(format!("signing key rejected: {e}")))?;
    mac.update(base_string.as_bytes());
    let signature = STANDARD.encode(mac.finalize().into_bytes());
    params.push(("oauth_signature".into(), signature));

    Ok(SignedRequest {
        method,
        url: base_url.into(),
        params,
        binary: args.binary().cloned(),
    })
}

/// `METHOD&url&params`, each component percent encoded, params sorted by name then value
pub fn signature_base_string(method: HttpMethod, url: &str, params: &[(String, String)]) -> String {
    let mut encoded: Vec<(Cow<'_, str>, Cow<'_, str>)> = params
        .iter()
        .map(|(n, v)| (encode(n), encode(v)))
        .collect();
    encoded.sort();
    let param_string = encoded
        .iter()
        .map(|(n, v)| format!("{n}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let method: &'static str = method.into();
    format!("{}&{}&{}", method, encode(url), encode(&param_string))
}

// RFC 3986 encoding, only the unreserved characters are left as is
fn encode(s: &str) -> Cow<'_, str> {
    urlencoding::encode(s)
}
