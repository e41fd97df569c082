/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::macros::{nested_response, stream_pages};
use crate::rest::parsers::{Fields, JsonObject};
use crate::rest::{
    ApiClient, ApiResponse, ArgumentSet, Comment, CreatedPhotoset, DecodeError,
    Paginated, Photo, Photoset, PhotosetInfos, Transport,
};
use async_stream::try_stream;
use futures::Stream;
use serde_json::Value;
use std::sync::Arc;

/// Photoset (album) related calls.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/) under "photosets" for the
/// individual methods.
#[derive(Debug)]
pub struct PhotosetsService<T = reqwest::Client> {
    api: Arc<ApiClient<T>>,
}

impl<T> Clone for PhotosetsService<T> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
        }
    }
}

impl<T: Transport> PhotosetsService<T> {
    pub fn new(api: Arc<ApiClient<T>>) -> Self {
        Self { api }
    }

    /// Returns the photoset with the given id
    pub async fn photoset_by_id(&self, photoset_id: &str) -> Result<Photoset, FlickrError> {
        let mut args = ArgumentSet::new("flickr.photosets.getInfo");
        args.put("photoset_id", photoset_id)?;
        Ok(self.api.do_get::<PhotosetResponse>(args).await?.photoset)
    }

    /// Returns one page of the photosets belonging to a user. At most 500 sets fit on a page.
    pub async fn photosets(
        &self,
        user_id: &str,
        per_page: u32,
        page: u32,
    ) -> Result<Paginated<Photoset>, FlickrError> {
        let mut args = ArgumentSet::new("flickr.photosets.getList");
        args.put("user_id", user_id)?
            .put("per_page", per_page)?
            .put("page", page)?;
        Ok(self.api.do_get::<PhotosetsResponse>(args).await?.photosets)
    }

    /// Streams every photoset belonging to a user
    pub fn all_photosets(
        &self,
        user_id: &str,
        per_page: u32,
    ) -> impl Stream<Item = Result<Photoset, FlickrError>> {
        let params: [(&str, &str); 1] = [("user_id", user_id)];
        stream_pages!(
            self.api,
            "flickr.photosets.getList",
            params,
            per_page,
            PhotosetsResponse,
            photosets
        )
    }

    /// Returns one page of the photos in a set. At most 500 photos fit on a page.
    pub async fn photos(
        &self,
        photoset_id: &str,
        per_page: u32,
        page: u32,
    ) -> Result<Paginated<Photo>, FlickrError> {
        let mut args = ArgumentSet::new("flickr.photosets.getPhotos");
        args.put("photoset_id", photoset_id)?
            .put("per_page", per_page)?
            .put("page", page)?;
        Ok(self.api.do_get::<PhotosInSetResponse>(args).await?.photos)
    }

    /// Streams every photo in a set
    pub fn all_photos(
        &self,
        photoset_id: &str,
        per_page: u32,
    ) -> impl Stream<Item = Result<Photo, FlickrError>> {
        let params: [(&str, &str); 1] = [("photoset_id", photoset_id)];
        stream_pages!(
            self.api,
            "flickr.photosets.getPhotos",
            params,
            per_page,
            PhotosInSetResponse,
            photos
        )
    }

    /// Returns the detailed information about a set
    pub async fn infos(&self, photoset_id: &str) -> Result<PhotosetInfos, FlickrError> {
        let mut args = ArgumentSet::new("flickr.photosets.getInfo");
        args.put("photoset_id", photoset_id)?;
        Ok(self.api.do_get::<PhotosetInfosResponse>(args).await?.infos)
    }

    /// Returns the comments left on a set
    pub async fn comments(&self, photoset_id: &str) -> Result<Vec<Comment>, FlickrError> {
        let mut args = ArgumentSet::new("flickr.photosets.comments.getList");
        args.put("photoset_id", photoset_id)?;
        Ok(self.api.do_get::<CommentsResponse>(args).await?.comments)
    }

    /// Creates a new set, `primary_photo_id` becomes its cover
    pub async fn create_photoset(
        &self,
        title: &str,
        description: &str,
        primary_photo_id: &str,
    ) -> Result<CreatedPhotoset, FlickrError> {
        let mut args = ArgumentSet::new("flickr.photosets.create");
        args.put("title", title)?
            .put("description", description)?
            .put("primary_photo_id", primary_photo_id)?;
        Ok(self.api.do_post::<CreatedPhotosetResponse>(args).await?.photoset)
    }

    pub async fn delete_photoset(&self, photoset_id: &str) -> Result<(), FlickrError> {
        let mut args = ArgumentSet::new("flickr.photosets.delete");
        args.put("photoset_id", photoset_id)?;
        self.api.do_post(args).await
    }

    /// Changes the title and description of a set
    pub async fn edit_photoset_meta(
        &self,
        photoset_id: &str,
        title: &str,
        description: &str,
    ) -> Result<(), FlickrError> {
        let mut args = ArgumentSet::new("flickr.photosets.editMeta");
        args.put("photoset_id", photoset_id)?
            .put("title", title)?
            .put("description", description)?;
        self.api.do_post(args).await
    }

    pub async fn set_primary_photo(&self, photoset_id: &str, photo_id: &str) -> Result<(), FlickrError> {
        let mut args = ArgumentSet::new("flickr.photosets.setPrimaryPhoto");
        args.put("photoset_id", photoset_id)?.put("photo_id", photo_id)?;
        self.api.do_post(args).await
    }

    pub async fn add_photo(&self, photoset_id: &str, photo_id: &str) -> Result<(), FlickrError> {
        let mut args = ArgumentSet::new("flickr.photosets.addPhoto");
        args.put("photoset_id", photoset_id)?.put("photo_id", photo_id)?;
        self.api.do_post(args).await
    }

    /// Removes several photos from a set in one call
    pub async fn remove_photos(&self, photoset_id: &str, photo_ids: &[&str]) -> Result<(), FlickrError> {
        if photo_ids.is_empty() {
            return Ok(());
        }
        let mut args = ArgumentSet::new("flickr.photosets.removePhotos");
        args.put("photoset_id", photoset_id)?
            .put("photo_ids", photo_ids.join(","))?;
        self.api.do_post(args).await
    }

    /// Comments on a set, returning the id of the new comment
    pub async fn add_comment(&self, photoset_id: &str, text: &str) -> Result<String, FlickrError> {
        let mut args = ArgumentSet::new("flickr.photosets.comments.addComment");
        args.put("photoset_id", photoset_id)?.put("comment_text", text)?;
        Ok(self.api.do_post::<AddedCommentResponse>(args).await?.comment_id)
    }

    pub async fn delete_comment(&self, comment_id: &str) -> Result<(), FlickrError> {
        let mut args = ArgumentSet::new("flickr.photosets.comments.deleteComment");
        args.put("comment_id", comment_id)?;
        self.api.do_post(args).await
    }

    pub async fn edit_comment(&self, comment_id: &str, text: &str) -> Result<(), FlickrError> {
        let mut args = ArgumentSet::new("flickr.photosets.comments.editComment");
        args.put("comment_id", comment_id)?.put("comment_text", text)?;
        self.api.do_post(args).await
    }
}

nested_response!(PhotosetResponse, photoset: Photoset, "photoset", Photoset::decode);
nested_response!(PhotosetInfosResponse, infos: PhotosetInfos, "photoset", PhotosetInfos::decode);
nested_response!(CreatedPhotosetResponse, photoset: CreatedPhotoset, "photoset", CreatedPhotoset::decode);
nested_response!(PhotosetsResponse, photosets: Paginated<Photoset>, "photosets", |json| {
    Paginated::decode(json, "photoset", Photoset::decode)
});
// The set's own fields sit alongside the page metadata, only the photos are of interest
nested_response!(PhotosInSetResponse, photos: Paginated<Photo>, "photoset", |json| {
    Paginated::decode(json, "photo", Photo::decode)
});

// Expected response for a request to list a set's comments.
// The `comment` array is left out when there are none.
#[derive(Debug)]
struct CommentsResponse {
    comments: Vec<Comment>,
}

impl ApiResponse for CommentsResponse {
    fn decode(payload: &JsonObject) -> Result<Self, DecodeError> {
        let comments = Fields::new("CommentsResponse", payload).object("comments")?;
        let items = Fields::new("CommentsResponse", comments)
            .opt_array("comment")?
            .map(Vec::as_slice)
            .unwrap_or_default();
        let comments = items
            .iter()
            .enumerate()
            .map(|(idx, item)| match item {
                Value::Object(obj) => Comment::decode(obj),
                _ => Err(DecodeError::wrong_type(
                    "CommentsResponse",
                    format!("comment[{idx}]"),
                    "object",
                )),
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { comments })
    }
}

// Adding a comment only hands back its id
#[derive(Debug)]
struct AddedCommentResponse {
    comment_id: String,
}

impl ApiResponse for AddedCommentResponse {
    fn decode(payload: &JsonObject) -> Result<Self, DecodeError> {
        let comment = Fields::new("AddedCommentResponse", payload).object("comment")?;
        Ok(Self {
            comment_id: Fields::new("Comment", comment).string("id")?,
        })
    }
}
