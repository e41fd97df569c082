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

/// A comment left on a photoset
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    /// `nsid` of the author
    pub author: String,
    pub author_name: String,
    pub real_name: Option<String>,
    pub date_created: DateTime<Utc>,
    pub permalink: String,
    pub text: String,
}

impl Comment {
    pub fn decode(json: &JsonObject) -> Result<Self, DecodeError> {
        let fields = Fields::new("Comment", json);
        Ok(Self {
            id: fields.string("id")?,
            author: fields.string("author")?,
            author_name: fields.string("authorname")?,
            real_name: fields.opt_string("realname")?,
            date_created: fields.timestamp("datecreate")?,
            permalink: fields.string("permalink")?,
            text: fields.string("_content")?,
        })
    }
}
