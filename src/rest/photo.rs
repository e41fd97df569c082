/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::DecodeError;
use crate::rest::parsers::{Fields, JsonObject};
use crate::rest::PhotoSize;
use serde::Serialize;

/// Holds information about a photo as listed by the API.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/misc.urls.html) for how the
/// individual fields make up the image urls.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    pub id: String,
    pub secret: String,
    pub server: String,
    pub farm: u32,
    pub title: String,
    pub is_primary: bool,
    pub is_public: bool,
    pub is_friend: bool,
    pub is_family: bool,
}

impl Photo {
    pub fn decode(json: &JsonObject) -> Result<Self, DecodeError> {
        let fields = Fields::new("Photo", json);
        Ok(Self {
            id: fields.string("id")?,
            secret: fields.string("secret")?,
            server: fields.string("server")?,
            farm: fields.uint("farm")?,
            title: fields.content("title")?,
            is_primary: fields.flag("isprimary")?,
            is_public: fields.flag("ispublic")?,
            is_friend: fields.flag("isfriend")?,
            is_family: fields.flag("isfamily")?,
        })
    }

    /// Url of the static image in the requested size
    pub fn url(&self, size: PhotoSize) -> String {
        let suffix: &'static str = size.into();
        format!(
            "https://live.staticflickr.com/{}/{}_{}{suffix}.jpg",
            self.server, self.id, self.secret
        )
    }
}

/// Identifier of a freshly uploaded photo
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadedPhoto {
    pub id: String,
}

impl UploadedPhoto {
    pub fn decode(json: &JsonObject) -> Result<Self, DecodeError> {
        Ok(Self {
            id: Fields::new("UploadedPhoto", json).string("photoid")?,
        })
    }
}
