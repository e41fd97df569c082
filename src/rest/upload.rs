/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::{ApiClient, ArgumentSet, Transport, UploadContentType, UploadedPhoto};
use bytes::Bytes;
use std::path::Path;
use std::sync::Arc;

/// Optional properties of an upload
#[derive(Default, Debug, Clone)]
pub struct UploadProps {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content_type: UploadContentType,
}

/// Sends new photos to the upload endpoint
#[derive(Debug)]
pub struct UploadService<T = reqwest::Client> {
    api: Arc<ApiClient<T>>,
}

impl<T> Clone for UploadService<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
        }
    }
}

impl<T: Transport> UploadService<T> {
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self { api }
    }

    /// Uploads the photo bytes, returning the new photo's id
    pub async fn upload_photo(
        &self,
        data: impl Into<Bytes>,
        file_name: &str,
        props: &UploadProps,
    ) -> Result<UploadedPhoto, FlickrError> {
        let mut args = ArgumentSet::raw();
        args.put_binary_file("photo", file_name, data, mime_type(file_name))?;
        args.put("content_type", u8::from(props.content_type))?;
        if let Some(title) = &props.title {
            args.put("title", title)?;
        }
        if let Some(description) = &props.description {
            args.put("description", description)?;
        }
        self.api.do_upload(args).await
    }

    /// Uploads the file at `path`.
    ///
    /// The file is read when this is called, before the returned future is first polled, so
    /// a large file blocks the calling thread for the duration of the read.
    pub fn upload_file(
        &self,
        path: impl AsRef<Path>,
        props: &UploadProps,
    ) -> impl Future<Output = Result<UploadedPhoto, FlickrError>> {
        let file = read_file(path.as_ref());
        async move {
            let (file_name, data) = file?;
            self.upload_photo(data, &file_name, props).await
        }
    }
}

fn read_file(path: &Path) -> Result<(String, Vec<u8>), FlickrError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            FlickrError::InvalidArgument(format!("no usable file name in {}", path.display()))
        })?;
    Ok((file_name.to_string(), std::fs::read(path)?))
}

// Content type of the multipart file part, Flickr sniffs the real type itself
fn mime_type(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "tif" | "tiff" => "image/tiff",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}
