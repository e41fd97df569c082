/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::DecodeError;
use crate::rest::parsers::{Fields, JsonObject};
use serde_json::Value;
use std::ops::Index;

const PAGINATED: &str = "Paginated";

/// One page of results along with where it sits in the full result set.
///
/// ```rust
/// use flickr::rest::{Paginated, Photo};
///
/// let json = serde_json::json!({
///     "page": 1, "pages": 0, "perpage": 50, "total": 0, "photo": []
/// });
/// let page = Paginated::decode(json.as_object().unwrap(), "photo", Photo::decode)?;
/// assert!(page.is_empty());
/// # Ok::<(), flickr::rest::DecodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Paginated<T> {
    page: u32,
    pages: u32,
    per_page: u32,
    total: u32,
    items: Vec<T>,
}

impl<T> Paginated<T> {
    /// Decodes the page metadata and every element of the `content_key` array.
    ///
    /// Fails as a whole if any single element does not decode.
    pub fn decode<F>(json: &JsonObject, content_key: &'static str, decode_item: F) -> Result<Self, DecodeError>
    where
        F: Fn(&JsonObject) -> Result<T, DecodeError>,
    {
        let fields = Fields::new(PAGINATED, json);
        let page = fields.uint("page")?;
        let pages = fields.uint("pages")?;
        let total = fields.uint("total")?;
        // Depending on the endpoint Flickr sends one or the other (or both)
        let per_page = match fields.opt_uint("per_page")? {
            Some(v) => v,
            None => fields.uint("perpage")?,
        };

        let items = match fields.opt_array(content_key)? {
            Some(values) => values
                .iter()
                .enumerate()
                .map(|(idx, value)| match value {
                    Value::Object(obj) => decode_item(obj),
                    _ => Err(DecodeError::wrong_type(
                        PAGINATED,
                        format!("{content_key}[{idx}]"),
                        "object",
                    )),
                })
                .collect::<Result<Vec<_>, _>>()?,
            // Some endpoints leave the array out entirely when there is nothing in it
            None if total == 0 => Vec::new(),
            None => return Err(DecodeError::missing(PAGINATED, content_key)),
        };

        if items.len() > per_page as usize {
            return Err(DecodeError::new(
                PAGINATED,
                content_key,
                format!("{} items exceed per page count of {per_page}", items.len()),
            ));
        }

        Ok(Self {
            page,
            pages,
            per_page,
            total,
            items,
        })
    }

    /// Index of this page, starting at 1
    pub fn page_index(&self) -> u32 {
        self.page
    }

    pub fn pages_count(&self) -> u32 {
        self.pages
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Number of items across all pages
    pub fn total(&self) -> u32 {
        self.total
    }

    /// True when the whole result set is empty, regardless of what this page holds
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// True when a page after this one exists
    pub fn has_next_page(&self) -> bool {
        self.page < self.pages
    }
}

impl<T> Index<usize> for Paginated<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<T> IntoIterator for Paginated<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Paginated<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
