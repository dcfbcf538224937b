//! Mock HTTP transport for testing.
//!
//! Plays back queued responses and records every request so tests can
//! assert on the exact wire traffic the client produced.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use http::Method;

use crate::ports::{HttpTransport, TransportError, TransportResponse};

/// One captured request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub idempotency_key: Option<String>,
}

#[derive(Default)]
struct MockState {
    responses: VecDeque<Result<TransportResponse, TransportError>>,
    requests: Vec<RecordedRequest>,
}

/// Scripted [`HttpTransport`] implementation.
///
/// Responses are returned in the order they were queued; sending with an
/// empty queue fails the request, which keeps a missing expectation from
/// passing silently.
#[derive(Default)]
pub struct MockTransport {
    state: Mutex<MockState>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a JSON response with the given status.
    pub fn enqueue_json(&self, status: u16, body: serde_json::Value) {
        self.enqueue(TransportResponse {
            status,
            body: body.to_string().into_bytes(),
        });
    }

    /// Queues an empty-bodied response (e.g. 204 from settle/cancel).
    pub fn enqueue_empty(&self, status: u16) {
        self.enqueue(TransportResponse {
            status,
            body: Vec::new(),
        });
    }

    pub fn enqueue(&self, response: TransportResponse) {
        self.state
            .lock()
            .expect("mock state lock")
            .responses
            .push_back(Ok(response));
    }

    /// Queues a transport-level failure.
    pub fn enqueue_error(&self, error: TransportError) {
        self.state
            .lock()
            .expect("mock state lock")
            .responses
            .push_back(Err(error));
    }

    /// All requests captured so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().expect("mock state lock").requests.clone()
    }

    /// The single captured request; panics if there is not exactly one.
    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        idempotency_key: Option<&str>,
    ) -> Result<TransportResponse, TransportError> {
        let mut state = self.state.lock().expect("mock state lock");
        state.requests.push(RecordedRequest {
            method,
            path: path.to_string(),
            body,
            idempotency_key: idempotency_key.map(str::to_string),
        });
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no queued response".to_string())))
    }
}
