/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate flickr;

use anyhow::Result;
use dotenvy::dotenv;
use flickr::rest::{Client, Creds, UploadContentType, UploadProps};
use std::path::PathBuf;

// Uploads every file given on the command line and gathers them in a new photoset.
// NOTE: needs an access token with write permission.
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let files: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if files.is_empty() {
        anyhow::bail!("usage: photo_uploader <file>...");
    }

    let client = Client::new(get_full_auth_tokens()?);
    let uploads = client.uploads();

    let mut photo_ids = Vec::new();
    for file in &files {
        let props = UploadProps {
            title: file.file_stem().map(|stem| stem.to_string_lossy().into_owned()),
            description: None,
            content_type: UploadContentType::Photo,
        };
        let uploaded = uploads.upload_file(file, &props).await?;
        println!("Uploaded {} as {}", file.display(), uploaded.id);
        photo_ids.push(uploaded.id);
    }

    // The first upload becomes the cover, the rest are added after it
    let photosets = client.photosets();
    let created = photosets
        .create_photoset("Uploads", "Added by photo_uploader", &photo_ids[0])
        .await?;
    for photo_id in &photo_ids[1..] {
        photosets.add_photo(&created.id, photo_id).await?;
    }
    println!("Created photoset {} at {}", created.id, created.url);

    Ok(())
}

fn get_full_auth_tokens() -> Result<Creds> {
    let api_key = std::env::var("FLICKR_API_KEY")?;
    let api_secret = std::env::var("FLICKR_API_SECRET")?;
    let token = std::env::var("FLICKR_ACCESS_TOKEN")?;
    let token_secret = std::env::var("FLICKR_ACCESS_TOKEN_SECRET")?;

    Ok(Creds::from_tokens(
        &api_key,
        &api_secret,
        Some(&token),
        Some(&token_secret),
    ))
}
