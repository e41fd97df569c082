/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

#[cfg(test)]
mod test {
    use crate::helpers::{self, TEST_REST_URL, TEST_UPLOAD_URL};
    use flickr::rest::{ErrorCode, FlickrError, HttpMethod, UploadContentType, UploadProps};
    use futures::{StreamExt, pin_mut};
    use serde_json::{Value, json};

    fn photoset(id: &str) -> Value {
        json!({
            "id": id,
            "primary": "5467345987",
            "secret": "f5e6d7",
            "server": "5130",
            "farm": 6,
            "photos": 2,
            "videos": 0,
            "title": {"_content": format!("Set {id}")},
            "description": {"_content": ""},
            "date_create": "1299514498",
            "date_update": "1300335009"
        })
    }

    fn photo(id: &str) -> Value {
        json!({
            "id": id,
            "secret": "abc",
            "server": "65535",
            "farm": 66,
            "title": format!("Photo {id}"),
            "isprimary": "0"
        })
    }

    fn photos_page(page: u32, pages: u32, ids: &[&str]) -> Value {
        json!({
            "photoset": {
                "id": "72157626216528324",
                "primary": "5467345987",
                "owner": "12345678@N00",
                "ownername": "jdoe",
                "photo": ids.iter().map(|id| photo(id)).collect::<Vec<_>>(),
                "page": page,
                "per_page": 2,
                "perpage": 2,
                "pages": pages,
                "title": "Holiday",
                "total": "3"
            },
            "stat": "ok"
        })
    }

    #[tokio::test]
    async fn photosets_list_is_a_signed_get() {
        let (client, transport) = helpers::mock_client();
        transport.push_json(json!({
            "photosets": {
                "page": 1, "pages": 1, "perpage": 50, "total": 2,
                "photoset": [photoset("1"), photoset("2")]
            },
            "stat": "ok"
        }));

        let sets = client
            .photosets()
            .photosets("12345678@N00", 50, 1)
            .await
            .unwrap();
        assert_eq!(sets.total(), 2);
        assert_eq!(sets[1].title, "Set 2");

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, TEST_REST_URL);
        assert_eq!(request.param("method"), Some("flickr.photosets.getList"));
        assert_eq!(request.param("format"), Some("json"));
        assert_eq!(request.param("nojsoncallback"), Some("1"));
        assert_eq!(request.param("user_id"), Some("12345678@N00"));
        assert_eq!(request.param("per_page"), Some("50"));
        assert_eq!(request.param("oauth_consumer_key"), Some("key"));
        assert_eq!(request.param("oauth_token"), Some("token"));
        assert!(request.signature().is_some());
        assert!(request.binary.is_none());
    }

    #[tokio::test]
    async fn fail_envelope_is_a_remote_service_error() {
        let (client, transport) = helpers::mock_client();
        transport.push_json(json!({"stat": "fail", "code": 1, "message": "Photoset not found"}));

        let err = client
            .photosets()
            .photoset_by_id("nope")
            .await
            .unwrap_err();
        match err {
            FlickrError::RemoteService { code, message } => {
                assert_eq!(code, ErrorCode::NotFound);
                assert_eq!(message, "Photoset not found");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn unmapped_code_is_kept() {
        let (client, transport) = helpers::mock_client();
        transport.push_json(json!({"stat": "fail", "code": 3, "message": "Photo already in set"}));

        let err = client
            .photosets()
            .add_photo("72157626216528324", "5467345987")
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), Some(ErrorCode::Unknown(3)));
    }

    #[tokio::test]
    async fn schema_mismatch_is_not_a_remote_error() {
        let (client, transport) = helpers::mock_client();
        transport.push_json(json!({"stat": "ok", "photoset": {"id": "1"}}));

        let err = client
            .photosets()
            .photoset_by_id("1")
            .await
            .unwrap_err();
        match err {
            FlickrError::MalformedResponse(decode) => {
                assert_eq!(decode.entity, "Photoset");
                assert_eq!(decode.field, "primary");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn http_error_page_is_malformed_with_status() {
        let (client, transport) = helpers::mock_client();
        transport.push_body(502, "<html>Bad Gateway</html>");

        let err = client.contacts().contacts(10, 1).await.unwrap_err();
        match err {
            FlickrError::MalformedResponse(decode) => {
                assert!(decode.reason.starts_with("HTTP status 502"));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn network_failure_is_not_retried() {
        let (client, transport) = helpers::mock_client();
        transport.push_network_error("connection refused");
        transport.push_json(json!({"stat": "ok"}));

        let err = client
            .photosets()
            .delete_photoset("72157626216528324")
            .await
            .unwrap_err();
        assert!(matches!(err, FlickrError::Network(_)));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn create_photoset_is_a_form_post() {
        let (client, transport) = helpers::mock_client();
        transport.push_json(json!({
            "photoset": {"id": "72157626216528999", "url": "https://www.flickr.com/photos/jdoe/sets/72157626216528999/"},
            "stat": "ok"
        }));

        let created = client
            .photosets()
            .create_photoset("Holiday", "Two weeks in the sun", "5467345987")
            .await
            .unwrap();
        assert_eq!(created.id, "72157626216528999");

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.param("method"), Some("flickr.photosets.create"));
        assert_eq!(request.param("primary_photo_id"), Some("5467345987"));
        assert!(request.binary.is_none());
        assert!(request.query_string().contains("title=Holiday"));
    }

    #[tokio::test]
    async fn remove_photos_joins_ids() {
        let (client, transport) = helpers::mock_client();
        transport.push_json(json!({"stat": "ok"}));

        client
            .photosets()
            .remove_photos("72157626216528324", &["1", "2", "3"])
            .await
            .unwrap();
        assert_eq!(transport.last_request().param("photo_ids"), Some("1,2,3"));

        // Nothing to remove means nothing to send
        client
            .photosets()
            .remove_photos("72157626216528324", &[])
            .await
            .unwrap();
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn comments_may_be_absent() {
        let (client, transport) = helpers::mock_client();
        transport.push_json(json!({"comments": {"photoset_id": "72157626216528324"}, "stat": "ok"}));
        transport.push_json(json!({
            "comments": {
                "photoset_id": "72157626216528324",
                "comment": [{
                    "id": "6065-1", "author": "87654321@N00", "authorname": "friend",
                    "datecreate": "1300385402", "permalink": "https://flic.kr/c/1",
                    "_content": "Lovely!"
                }]
            },
            "stat": "ok"
        }));

        let service = client.photosets();
        assert!(service.comments("72157626216528324").await.unwrap().is_empty());
        let comments = service.comments("72157626216528324").await.unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].text, "Lovely!");
    }

    #[tokio::test]
    async fn add_comment_returns_new_id() {
        let (client, transport) = helpers::mock_client();
        transport.push_json(json!({"comment": {"id": "6065-72157626216528324-1"}, "stat": "ok"}));

        let id = client
            .photosets()
            .add_comment("72157626216528324", "Lovely set!")
            .await
            .unwrap();
        assert_eq!(id, "6065-72157626216528324-1");
        assert_eq!(
            transport.last_request().param("comment_text"),
            Some("Lovely set!")
        );
    }

    #[tokio::test]
    async fn upload_is_multipart_to_upload_endpoint() {
        let (client, transport) = helpers::mock_client();
        transport.push_body(
            200,
            "<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n<rsp stat=\"ok\">\n<photoid>52345678901</photoid>\n</rsp>\n",
        );

        let props = UploadProps {
            title: Some("Sunset".to_string()),
            description: None,
            content_type: UploadContentType::Photo,
        };
        let uploaded = client
            .uploads()
            .upload_photo(vec![0xffu8, 0xd8, 0xff], "sunset.JPG", &props)
            .await
            .unwrap();
        assert_eq!(uploaded.id, "52345678901");

        let request = transport.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, TEST_UPLOAD_URL);
        assert_eq!(request.param("method"), None);
        assert_eq!(request.param("format"), None);
        assert_eq!(request.param("content_type"), Some("1"));
        assert_eq!(request.param("title"), Some("Sunset"));
        assert_eq!(request.param("description"), None);
        assert_eq!(request.param("photo"), None);

        let binary = request.binary.unwrap();
        assert_eq!(binary.name, "photo");
        assert_eq!(binary.file_name, "sunset.JPG");
        assert_eq!(binary.content_type, "image/jpeg");
        assert_eq!(binary.data.len(), 3);
    }

    #[tokio::test]
    async fn upload_failure_is_a_remote_service_error() {
        let (client, transport) = helpers::mock_client();
        transport.push_body(
            200,
            "<rsp stat=\"fail\"><err code=\"98\" msg=\"Invalid auth token\" /></rsp>",
        );

        let err = client
            .uploads()
            .upload_photo(vec![1u8], "a.png", &UploadProps::default())
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), Some(ErrorCode::LoginFailed));
    }

    #[tokio::test]
    async fn upload_file_requires_existing_file() {
        let (client, transport) = helpers::mock_client();
        let err = client
            .uploads()
            .upload_file("/definitely/not/here.jpg", &UploadProps::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FlickrError::Io(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn upload_file_sends_file_name_and_content() {
        let (client, transport) = helpers::mock_client();
        transport.push_body(200, "<rsp stat=\"ok\"><photoid>77</photoid></rsp>");

        let path = std::env::temp_dir().join(format!("flickr-upload-{}.png", std::process::id()));
        std::fs::write(&path, [0x89u8, b'P', b'N', b'G']).unwrap();
        let uploaded = client
            .uploads()
            .upload_file(&path, &UploadProps::default())
            .await;
        std::fs::remove_file(&path).unwrap();

        assert_eq!(uploaded.unwrap().id, "77");
        let binary = transport.last_request().binary.unwrap();
        assert_eq!(binary.file_name, path.file_name().unwrap().to_str().unwrap());
        assert_eq!(binary.content_type, "image/png");
        assert_eq!(&binary.data[..], &[0x89u8, b'P', b'N', b'G'][..]);
    }

    #[tokio::test]
    async fn all_photos_walks_every_page() {
        let (client, transport) = helpers::mock_client();
        transport.push_json(photos_page(1, 2, &["1", "2"]));
        transport.push_json(photos_page(2, 2, &["3"]));

        let service = client.photosets();
        let photos = service.all_photos("72157626216528324", 2);
        pin_mut!(photos);
        let mut ids = Vec::new();
        while let Some(photo) = photos.next().await {
            ids.push(photo.unwrap().id);
        }
        assert_eq!(ids, vec!["1", "2", "3"]);

        let pages: Vec<Option<String>> = transport
            .requests()
            .iter()
            .map(|r| r.param("page").map(str::to_string))
            .collect();
        assert_eq!(pages, vec![Some("1".to_string()), Some("2".to_string())]);
    }

    #[tokio::test]
    async fn all_contacts_stops_on_first_error() {
        let (client, transport) = helpers::mock_client();
        transport.push_json(json!({
            "contacts": {
                "page": 1, "pages": 3, "per_page": 1, "perpage": 1, "total": 3,
                "contact": [{"nsid": "1@N00", "username": "one", "friend": 1}]
            },
            "stat": "ok"
        }));
        transport.push_json(json!({"stat": "fail", "code": 105, "message": "Service currently unavailable"}));

        let service = client.contacts();
        let contacts = service.all_contacts(1);
        pin_mut!(contacts);

        let first = contacts.next().await.unwrap().unwrap();
        assert_eq!(first.id, "1@N00");
        assert!(first.is_friend);

        let second = contacts.next().await.unwrap();
        assert_eq!(
            second.unwrap_err().error_code(),
            Some(ErrorCode::ServiceUnavailable)
        );
        assert!(contacts.next().await.is_none());
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn public_contacts_pass_user_id() {
        let (client, transport) = helpers::mock_client();
        transport.push_json(json!({
            "contacts": {"page": 1, "pages": 0, "perpage": 1000, "total": 0, "contact": []},
            "stat": "ok"
        }));

        let contacts = client
            .contacts()
            .public_contacts("12345678@N00", 1000, 1)
            .await
            .unwrap();
        assert!(contacts.is_empty());
        assert_eq!(
            transport.last_request().param("method"),
            Some("flickr.contacts.getPublicList")
        );
        assert_eq!(transport.last_request().param("user_id"), Some("12345678@N00"));
    }
}
