/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use num_enum::IntoPrimitive;
use strum_macros::{Display, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

/// Value of the upload `content_type` parameter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, IntoPrimitive)]
#[repr(u8)]
pub enum UploadContentType {
    #[default]
    Photo = 1,
    Screenshot = 2,
    Other = 3,
}

/// Static image sizes, serialized to the url suffix Flickr uses for them
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum PhotoSize {
    #[strum(to_string = "_s")]
    Square75,
    #[strum(to_string = "_q")]
    Square150,
    #[strum(to_string = "_t")]
    Thumbnail,
    #[strum(to_string = "_m")]
    Small240,
    #[strum(to_string = "_n")]
    Small320,
    #[strum(to_string = "")]
    Medium500,
    #[strum(to_string = "_z")]
    Medium640,
    #[strum(to_string = "_c")]
    Medium800,
    #[strum(to_string = "_b")]
    Large1024,
}
