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
use flickr::rest::{Client, Creds, PhotoSize, Photoset, PhotosetsService};
use futures::{StreamExt, pin_mut};

// Prints the first few photos of a set along with where to fetch them
async fn show_photoset(service: &PhotosetsService, photoset: &Photoset, max_photos: usize) -> Result<()> {
    println!(
        "Found photoset: {} ({} photos) id:{}",
        photoset.title, photoset.photo_count, photoset.id
    );

    let photos = service.all_photos(&photoset.id, 100);
    pin_mut!(photos);
    let mut shown = 0;
    while let Some(photo) = photos.next().await {
        let photo = photo?;
        println!("\t{}\t{}", photo.title, photo.url(PhotoSize::Medium640));
        shown += 1;
        if shown == max_photos {
            break;
        }
    }
    Ok(())
}

// main
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    // The user to browse is given on the command line, e.g. `12345678@N00`
    let user_id = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: photoset_browser <user id>"))?;

    // Public photosets only need the API key/secret
    let client = Client::new(get_read_only_auth_tokens()?);
    let service = client.photosets();

    let photosets = service.all_photosets(&user_id, 50);
    pin_mut!(photosets);
    while let Some(photoset) = photosets.next().await {
        let photoset = photoset?;
        show_photoset(&service, &photoset, 5).await?;

        let comments = service.comments(&photoset.id).await?;
        for comment in comments {
            println!("\t> {}: {}", comment.author_name, comment.text);
        }
    }

    Ok(())
}

fn get_read_only_auth_tokens() -> Result<Creds> {
    let api_key = std::env::var("FLICKR_API_KEY")?;
    let api_secret = std::env::var("FLICKR_API_SECRET")?;
    Ok(Creds::from_tokens(&api_key, &api_secret, None, None))
}
