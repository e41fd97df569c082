/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::DecodeError;
use crate::rest::parsers::{Fields, JsonObject};
use crate::rest::Avatar;
use serde::Serialize;

/// Someone in a user's contact list.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.contacts.getList.html) for
/// more details on the individual fields.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// The `nsid` of the contact
    pub id: String,
    pub user_name: String,
    pub real_name: Option<String>,
    pub avatar: Avatar,
    pub is_friend: bool,
    pub is_family: bool,
    pub is_ignored: bool,
}

impl Contact {
    pub fn decode(json: &JsonObject) -> Result<Self, DecodeError> {
        let fields = Fields::new("Contact", json);
        let id = fields.string("nsid")?;
        Ok(Self {
            user_name: fields.string("username")?,
            real_name: fields.opt_string("realname")?.filter(|n| !n.is_empty()),
            avatar: Avatar::decode(json, &id)?,
            is_friend: fields.flag("friend")?,
            is_family: fields.flag("family")?,
            is_ignored: fields.flag("ignored")?,
            id,
        })
    }
}
