/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

// These talk to the real service and need FLICKR_* keys in the environment (or a .env file)
#[cfg(test)]
mod test {
    use crate::helpers;
    use dotenvy::dotenv;
    use flickr::rest::{Client, ErrorCode, FlickrError};
    use futures::{StreamExt, pin_mut};

    // Flickr's own account
    const PUBLIC_USER_ID: &str = "66956608@N06";

    #[ignore]
    #[tokio::test]
    async fn public_photosets_and_photos() {
        dotenv().ok();
        helpers::init_logging();
        let creds = helpers::get_read_only_auth_tokens().unwrap();
        let client = Client::new(creds);

        let sets = client
            .photosets()
            .photosets(PUBLIC_USER_ID, 10, 1)
            .await
            .unwrap();
        println!("Photosets: {} in {} pages", sets.total(), sets.pages_count());
        assert!(sets.len() <= 10);

        let Some(first) = sets.iter().next() else {
            return;
        };
        let service = client.photosets();
        let photos = service.all_photos(&first.id, 100);

        let mut photo_count: u32 = 0;
        pin_mut!(photos);
        while let Some(photo_result) = photos.next().await {
            let _ = photo_result.unwrap();
            photo_count += 1;
        }
        // Videos are listed along with the photos
        assert_eq!(
            first.photo_count + first.video_count.unwrap_or(0),
            photo_count
        );
    }

    #[ignore]
    #[tokio::test]
    async fn unknown_photoset_is_not_found() {
        dotenv().ok();
        let creds = helpers::get_read_only_auth_tokens().unwrap();
        let client = Client::new(creds);

        let err = client.photosets().photoset_by_id("1").await.unwrap_err();
        assert!(matches!(err, FlickrError::RemoteService { .. }));
        assert_eq!(err.error_code(), Some(ErrorCode::NotFound));
    }

    // Needs an access token/secret
    #[ignore]
    #[tokio::test]
    async fn authenticated_contacts() {
        dotenv().ok();
        let creds = helpers::get_full_auth_tokens().unwrap();
        let client = Client::new(creds);

        let service = client.contacts();
        let contacts = service.all_contacts(100);
        pin_mut!(contacts);
        while let Some(contact) = contacts.next().await {
            println!("Contact: {}", contact.unwrap().user_name);
        }
    }
}
