/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use bytes::Bytes;
use flickr::rest::{
    Client, Creds, Endpoints, FlickrError, RawResponse, SignedRequest, Transport,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[allow(dead_code)]
pub(crate) const TEST_REST_URL: &str = "https://rest.example.com/services/rest";

#[allow(dead_code)]
pub(crate) const TEST_UPLOAD_URL: &str = "https://up.example.com/services/upload";

#[allow(dead_code)]
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Replays canned responses and records every request it is handed
#[allow(dead_code)]
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<RawResponse, String>>>,
    requests: Mutex<Vec<SignedRequest>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub(crate) fn push_body(&self, status: u16, body: impl Into<Bytes>) {
        self.responses.lock().unwrap().push_back(Ok(RawResponse {
            status,
            body: body.into(),
        }));
    }

    pub(crate) fn push_json(&self, body: serde_json::Value) {
        self.push_body(200, serde_json::to_vec(&body).unwrap());
    }

    pub(crate) fn push_network_error(&self, msg: &str) {
        self.responses.lock().unwrap().push_back(Err(msg.to_string()));
    }

    pub(crate) fn requests(&self) -> Vec<SignedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> SignedRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

impl Transport for MockTransport {
    async fn execute(&self, request: SignedRequest) -> Result<RawResponse, FlickrError> {
        self.requests.lock().unwrap().push(request);
        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(Ok(resp)) => Ok(resp),
            Some(Err(msg)) => Err(FlickrError::Network(msg.into())),
            None => Err(FlickrError::Network("no canned response left".into())),
        }
    }
}

#[allow(dead_code)]
pub(crate) fn test_creds() -> Creds {
    Creds::from_tokens("key", "secret", Some("token"), Some("token-secret"))
}

#[allow(dead_code)]
pub(crate) fn mock_client() -> (Client<Arc<MockTransport>>, Arc<MockTransport>) {
    init_logging();
    let transport = Arc::new(MockTransport::default());
    let client = Client::with_endpoints(
        test_creds(),
        transport.clone(),
        Endpoints {
            rest: TEST_REST_URL.to_string(),
            upload: TEST_UPLOAD_URL.to_string(),
        },
    );
    (client, transport)
}

#[allow(dead_code)]
pub(crate) fn get_full_auth_tokens() -> anyhow::Result<Creds> {
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

#[allow(dead_code)]
pub(crate) fn get_read_only_auth_tokens() -> anyhow::Result<Creds> {
    let api_key = std::env::var("FLICKR_API_KEY")?;
    let api_secret = std::env::var("FLICKR_API_SECRET")?;

    Ok(Creds::from_tokens(&api_key, &api_secret, None, None))
}
