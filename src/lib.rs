/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Flickr
//!
//! This Flickr library was created for working with the Flickr REST API.
//!
//! For further details on the Rest API refer to the [Flickr API Docs](https://www.flickr.com/services/api/)
//!
//! ## Features
//!
//! - Photosets
//!     - List the sets of a user and the photos in a set (single pages or streamed)
//!     - Create, edit and delete sets, manage their photos
//!     - List, add, edit and delete comments
//! - Contacts
//!     - The calling user's contacts and any user's public contacts
//! - Uploads
//!     - Upload a photo from memory or from a file
//! - Lower level interface for handling the raw communication
//!
//! *The Flickr API uses OAuth1. This library handles the request signing.
//! Getting the Access Token/Secret is left up to the consumer of this library*
//!
//! *If you want to use this library for more that is currently implemented, the
//! [`rest::ApiClient`] is a way to make request/responses in a more direct way*
//!
//! ## Installation
//!
//! ```toml
//! [dependencies]
//! flickr = "0.1.0"
//! ```
//!
//! ## Usage
//!
//! **You will need to acquire an API key/secret from Flickr prior to using the API**
//!
//! ```rust
//! use flickr::rest::{Client, Creds, Photoset};
//! use futures::{pin_mut, StreamExt};
//!
//!async fn iterate_photosets<Fut>(
//!    api_key: &str,
//!    api_secret: &str,
//!    access_token: &str,
//!    access_token_secret: &str,
//!    user_id: &str,
//!    photoset_op: impl Fn(Photoset) -> Fut,
//!) -> anyhow::Result<()>
//!where
//!    Fut: Future<Output=anyhow::Result<bool>>,
//!{
//!    // The API key/secret is obtained from your Flickr account
//!    let client = Client::new(Creds::from_tokens(
//!         api_key,
//!         api_secret,
//!         Some(access_token),
//!         Some(access_token_secret),
//!     ));
//!
//!    // Page through all of the user's photosets
//!    let service = client.photosets();
//!    let photosets = service.all_photosets(user_id, 100);
//!    pin_mut!(photosets);
//!    while let Some(photoset) = photosets.next().await {
//!        // Do operation on photoset and stop stream if returns false
//!        if !photoset_op(photoset?).await? {
//!            break;
//!        }
//!    }
//!    Ok(())
//!}
//! ```
//!
//! ## Lower level interface
//!
//! Any REST method can be called through [`rest::ApiClient`] by providing a type implementing
//! [`rest::ApiResponse`] for its payload:
//!
//! ```rust
//! use flickr::rest::{ApiResponse, ArgumentSet, Client, DecodeError, JsonObject, decode_nested};
//!
//! struct Echo {
//!     name: String,
//! }
//!
//! impl ApiResponse for Echo {
//!     fn decode(payload: &JsonObject) -> Result<Self, DecodeError> {
//!         decode_nested("Echo", payload, "method", |method| {
//!             let name = method.get("_content").and_then(|v| v.as_str()).unwrap_or_default();
//!             Ok(Echo { name: name.to_string() })
//!         })
//!     }
//! }
//!
//! async fn echo(client: &Client) -> Result<String, flickr::rest::FlickrError> {
//!     let args = ArgumentSet::new("flickr.test.echo");
//!     Ok(client.api().do_get::<Echo>(args).await?.name)
//! }
//! ```
//!
pub mod rest;
