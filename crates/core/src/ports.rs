//! Port interfaces for HTTP execution
//!
//! The core never talks to the network directly. Services build a
//! [`RequestDescriptor`] and hand it to an [`HttpTransport`] supplied by
//! the infrastructure layer (or a recording fake in tests).

use async_trait::async_trait;
use ctct_domain::Result;

use crate::request::RequestDescriptor;

/// Executes one HTTP request and returns the raw response.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send the request.
    ///
    /// # Errors
    ///
    /// Returns [`ctct_domain::CtctError::Transport`] when no response was
    /// received. Any received response, whatever its status, is `Ok`.
    async fn execute(&self, request: RequestDescriptor) -> Result<RawResponse>;
}

/// Status and body of a received response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}
