use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ctct_core::{ConstantContact, HttpTransport, RawResponse, RequestDescriptor};
use ctct_domain::{CtctError, Result as DomainResult};

pub const API_KEY: &str = "test-key";
pub const TOKEN: &str = "test-token";

/// In-memory mock for `HttpTransport`.
///
/// Responses are handed out in the order they were queued; once the queue
/// is empty every request fails with a transport error.
#[derive(Default, Clone)]
pub struct RecordingTransport {
    requests: Arc<Mutex<Vec<RequestDescriptor>>>,
    responses: Arc<Mutex<VecDeque<DomainResult<RawResponse>>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body.
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Ok(RawResponse::new(status, body)));
        self
    }

    /// Queue a transport failure.
    pub fn fail(self, message: &str) -> Self {
        self.responses.lock().unwrap().push_back(Err(CtctError::Transport(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RequestDescriptor {
        self.requests.lock().unwrap().last().cloned().expect("no request was sent")
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Facade wired to this transport.
    pub fn client(&self) -> ConstantContact {
        ConstantContact::new(API_KEY, Arc::new(self.clone()))
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn execute(&self, request: RequestDescriptor) -> DomainResult<RawResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CtctError::Transport("no scripted response".into())))
    }
}
