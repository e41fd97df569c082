/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::DecodeError;
use crate::rest::parsers::{Fields, JsonObject};
use serde::Serialize;
use std::fmt;

const DEFAULT_BUDDY_ICON: &str = "https://www.flickr.com/images/buddyicon.gif";

/// Holds the owner of a photo or set as returned from the API.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.people.getInfo.html) for more
/// details on the individual fields.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Owner {
    /// The `nsid` of the user
    pub id: String,
    pub user_name: String,
    pub real_name: String,
    pub location: String,
    pub avatar: Avatar,
}

impl Owner {
    pub fn decode(json: &JsonObject) -> Result<Self, DecodeError> {
        let fields = Fields::new("Owner", json);
        let id = fields.string("nsid")?;
        Ok(Self {
            user_name: fields.string("username")?,
            real_name: fields.string("realname")?,
            location: fields.string("location")?,
            avatar: Avatar::decode(json, &id)?,
            id,
        })
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.real_name)
    }
}

/// Buddy icon of a user, built from the `iconserver`/`iconfarm` fields found alongside the `nsid`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub user_id: String,
    pub icon_server: Option<String>,
    pub icon_farm: Option<u32>,
}

impl Avatar {
    pub fn decode(json: &JsonObject, user_id: &str) -> Result<Self, DecodeError> {
        let fields = Fields::new("Avatar", json);
        // A server of "0" means the user never set an icon
        let icon_server = fields
            .opt_string("iconserver")?
            .filter(|server| !server.is_empty() && server != "0");
        Ok(Self {
            user_id: user_id.to_string(),
            icon_server,
            icon_farm: fields.opt_uint("iconfarm")?,
        })
    }

    pub fn url(&self) -> String {
        match (&self.icon_server, self.icon_farm) {
            (Some(server), Some(farm)) => format!(
                "https://farm{farm}.staticflickr.com/{server}/buddyicons/{}.jpg",
                self.user_id
            ),
            _ => DEFAULT_BUDDY_ICON.to_string(),
        }
    }
}
