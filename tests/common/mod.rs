//! Shared helpers for integration tests.
//!
//! [`RecordingTransport`] answers requests from a queue of canned responses
//! and keeps every request it was handed, so tests can assert both on model
//! state and on what went over the wire.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::Mutex;

use serde_json::Value;
use yii_model::{
    BaseUrl, HttpError, HttpRequest, HttpResponse, HttpResponseError, ModelClient, ModelConfig,
    Transport,
};

pub const BASE_URL: &str = "http://localhost/v1";

#[derive(Debug, Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    /// Queues a successful response.
    pub fn respond(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    /// Queues a non-2xx response.
    pub fn fail(&self, code: u16, body: Value) {
        let error = HttpResponseError::new(code, body, None);
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(HttpError::Response(error)));
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for RecordingTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send {
        self.requests.lock().unwrap().push(request);
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no response queued for request");
        async move { next }
    }
}

pub fn client() -> ModelClient<RecordingTransport> {
    let config = ModelConfig::builder()
        .base_url(BaseUrl::new(BASE_URL).unwrap())
        .build()
        .unwrap();
    ModelClient::with_transport(config, RecordingTransport::default())
}

/// A JSON response without headers.
pub fn json_response(code: u16, body: Value) -> HttpResponse {
    HttpResponse::new(code, HashMap::new(), body)
}

/// A list page of a 100-record, 20-per-page collection.
///
/// `links` is a list of `(rel, page)` pairs; the Link header is built from
/// them in the format Yii2 emits.
pub fn users_page(current_page: u64, links: &[(&str, u64)], body: Value) -> HttpResponse {
    let link = links
        .iter()
        .map(|(rel, page)| format!("<{BASE_URL}/users?page={page}&per-page=20>; rel={rel}"))
        .collect::<Vec<_>>()
        .join(", ");

    let mut headers = HashMap::new();
    headers.insert(
        "X-Pagination-Total-Count".to_string(),
        vec!["100".to_string()],
    );
    headers.insert("X-Pagination-Page-Count".to_string(), vec!["5".to_string()]);
    headers.insert(
        "X-Pagination-Current-Page".to_string(),
        vec![current_page.to_string()],
    );
    headers.insert("X-Pagination-Per-Page".to_string(), vec!["20".to_string()]);
    if !link.is_empty() {
        headers.insert("Link".to_string(), vec![link]);
    }

    HttpResponse::new(200, headers, body)
}

/// The query parameter `key` of a request.
pub fn query(request: &HttpRequest, key: &str) -> Option<String> {
    request.query.as_ref().and_then(|q| q.get(key).cloned())
}
