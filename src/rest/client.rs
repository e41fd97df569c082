/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::{
    ApiClient, ContactsService, Creds, Endpoints, PhotosetsService, Transport, UploadService,
};
use std::sync::Arc;

/// Entry point of the library, hands out the individual services.
///
/// Cloning is cheap, every clone and every service shares the same [ApiClient].
///
/// ```rust,no_run
/// use flickr::rest::{Client, Creds};
///
/// # async fn run() -> Result<(), flickr::rest::FlickrError> {
/// let client = Client::new(Creds::from_tokens("key", "secret", None, None));
/// let sets = client.photosets().photosets("12345678@N00", 50, 1).await?;
/// for set in &sets {
///     println!("{} ({} photos)", set.title, set.photo_count);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client<T = reqwest::Client> {
    api: Arc<ApiClient<T>>,
}

impl<T> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
        }
    }
}

impl Client {
    pub fn new(creds: Creds) -> Self {
        Self {
            api: Arc::new(ApiClient::new(creds)),
        }
    }
}

impl<T: Transport> Client<T> {
    /// Sends requests through the provided transport rather than a default `reqwest::Client`
    pub fn with_transport(creds: Creds, transport: T) -> Self {
        Self::from_api(ApiClient::with_transport(creds, transport))
    }

    /// Like [Client::with_transport] while also choosing the hosts to talk to
    pub fn with_endpoints(creds: Creds, transport: T, endpoints: Endpoints) -> Self {
        Self::from_api(ApiClient::with_transport(creds, transport).with_endpoints(endpoints))
    }

    pub fn from_api(api: ApiClient<T>) -> Self {
        Self { api: Arc::new(api) }
    }

    /// The lower level interface, for methods not covered by the services
    pub fn api(&self) -> &Arc<ApiClient<T>> {
        &self.api
    }

    pub fn photosets(&self) -> PhotosetsService<T> {
        PhotosetsService::new(self.api.clone())
    }

    pub fn contacts(&self) -> ContactsService<T> {
        ContactsService::new(self.api.clone())
    }

    pub fn uploads(&self) -> UploadService<T> {
        UploadService::new(self.api.clone())
    }
}
