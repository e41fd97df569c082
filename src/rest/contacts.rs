/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::macros::{nested_response, stream_pages};
use crate::rest::{ApiClient, ArgumentSet, Contact, Paginated, Transport};
use async_stream::try_stream;
use futures::Stream;
use std::sync::Arc;

/// Contact list calls
#[derive(Debug)]
pub struct ContactsService<T = reqwest::Client> {
    api: Arc<ApiClient<T>>,
}

impl<T> Clone for ContactsService<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
        }
    }
}

impl<T: Transport> ContactsService<T> {
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self { api }
    }

    /// Returns one page of the calling user's contacts. At most 1000 fit on a page.
    ///
    /// Needs an access token.
    pub async fn contacts(&self, per_page: u32, page: u32) -> Result<Paginated<Contact>, FlickrError> {
        let mut args = ArgumentSet::new("flickr.contacts.getList");
        args.put("per_page", per_page)?.put("page", page)?;
        Ok(self.api.do_get::<ContactsResponse>(args).await?.contacts)
    }

    /// Streams all of the calling user's contacts
    pub fn all_contacts(&self, per_page: u32) -> impl Stream<Item = Result<Contact, FlickrError>> {
        let params: [(&str, &str); 0] = [];
        stream_pages!(
            self.api,
            "flickr.contacts.getList",
            params,
            per_page,
            ContactsResponse,
            contacts
        )
    }

    /// Returns one page of the public contact list of any user
    pub async fn public_contacts(
        &self,
        user_id: &str,
        per_page: u32,
        page: u32,
    ) -> Result<Paginated<Contact>, FlickrError> {
        let mut args = ArgumentSet::new("flickr.contacts.getPublicList");
        args.put("per_page", per_page)?
            .put("page", page)?
            .put("user_id", user_id)?;
        Ok(self.api.do_get::<ContactsResponse>(args).await?.contacts)
    }
}

nested_response!(ContactsResponse, contacts: Paginated<Contact>, "contacts", |json| {
    Paginated::decode(json, "contact", Contact::decode)
});
