/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

pub mod api;
pub mod args;
pub mod client;
pub mod comment;
pub mod contact;
pub mod contacts;
pub mod envelope;
pub mod errors;
mod macros;
pub mod oauth;
pub mod owner;
pub mod paginated;
mod parsers;
pub mod photo;
pub mod photoset;
pub mod photosets;
pub mod properties;
pub mod transport;
pub mod upload;

pub use api::*;
pub use args::*;
pub use client::*;
pub use comment::*;
pub use contact::*;
pub use contacts::*;
pub use envelope::*;
pub use errors::*;
pub use oauth::*;
pub use owner::*;
pub use paginated::*;
pub use parsers::{JsonObject, decode_nested};
pub use photo::*;
pub use photoset::*;
pub use photosets::*;
pub use properties::*;
pub use transport::*;
pub use upload::*;
