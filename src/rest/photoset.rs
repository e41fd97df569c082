/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::DecodeError;
use crate::rest::parsers::{Fields, JsonObject};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Holds information returned for a photoset (album).
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.photosets.getList.html) for
/// more details on the individual fields.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Photoset {
    pub id: String,
    /// Id of the photo used as the set's cover
    pub primary: String,
    pub secret: String,
    pub server: String,
    pub farm: u32,
    pub photo_count: u32,
    pub video_count: Option<u32>,
    pub title: String,
    pub description: String,
    pub date_created: Option<DateTime<Utc>>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl Photoset {
    pub fn decode(json: &JsonObject) -> Result<Self, DecodeError> {
        let fields = Fields::new("Photoset", json);
        Ok(Self {
            id: fields.string("id")?,
            primary: fields.string("primary")?,
            secret: fields.string("secret")?,
            server: fields.string("server")?,
            farm: fields.uint("farm")?,
            photo_count: fields.uint("photos")?,
            video_count: fields.opt_uint("videos")?,
            title: fields.content("title")?,
            description: fields.content("description")?,
            date_created: fields.opt_timestamp("date_create")?,
            last_updated: fields.opt_timestamp("date_update")?,
        })
    }
}

/// The detailed view of a photoset returned by `flickr.photosets.getInfo`
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PhotosetInfos {
    pub photoset: Photoset,
    /// `nsid` of the owner
    pub owner: String,
    pub user_name: Option<String>,
    pub view_count: u32,
    pub comment_count: u32,
    pub can_comment: bool,
}

impl PhotosetInfos {
    pub fn decode(json: &JsonObject) -> Result<Self, DecodeError> {
        let fields = Fields::new("PhotosetInfos", json);
        Ok(Self {
            photoset: Photoset::decode(json)?,
            owner: fields.string("owner")?,
            user_name: fields.opt_string("username")?,
            view_count: fields.uint("count_views")?,
            comment_count: fields.uint("count_comments")?,
            can_comment: fields.flag("can_comment")?,
        })
    }
}

/// What `flickr.photosets.create` hands back
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CreatedPhotoset {
    pub id: String,
    pub url: String,
}

impl CreatedPhotoset {
    pub fn decode(json: &JsonObject) -> Result<Self, DecodeError> {
        let fields = Fields::new("CreatedPhotoset", json);
        Ok(Self {
            id: fields.string("id")?,
            url: fields.string("url")?,
        })
    }
}
