use std::time::Duration;

use async_trait::async_trait;
use ctct_core::{HttpMethod, HttpTransport, RawResponse, RequestBody, RequestDescriptor};
use ctct_domain::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use ctct_domain::{CtctError, Result};
use reqwest::{Client as ReqwestClient, Method};
use tracing::debug;

use crate::errors::InfraError;

/// HTTP client executing request descriptors with a fixed timeout.
///
/// Every descriptor is sent exactly once; failures are reported to the
/// caller as they happened.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Convenience constructor with default configuration.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    fn request(&self, descriptor: RequestDescriptor) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(to_method(descriptor.method), descriptor.url);
        for (name, value) in descriptor.headers {
            builder = builder.header(name, value);
        }
        match descriptor.body {
            Some(RequestBody::Json(text)) => builder.body(text),
            Some(RequestBody::Binary(bytes)) => builder.body(bytes),
            None => builder,
        }
    }
}

#[async_trait]
impl HttpTransport for HttpClient {
    async fn execute(&self, descriptor: RequestDescriptor) -> Result<RawResponse> {
        let method = descriptor.method;
        let url = descriptor.redacted_url().to_string();

        let request = self.request(descriptor).build().map_err(|err| CtctError::from(InfraError::from(err)))?;
        debug!(%method, %url, "sending HTTP request");

        let response = match self.client.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                let err = CtctError::from(InfraError::from(err));
                debug!(%method, %url, error = %err, "HTTP request failed");
                return Err(err);
            }
        };

        let status = response.status();
        debug!(%method, %url, %status, "received HTTP response");

        let body = response.text().await.map_err(|err| CtctError::from(InfraError::from(err)))?;
        Ok(RawResponse::new(status.as_u16(), body))
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
        }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout);

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| CtctError::from(InfraError::from(err)))?;

        Ok(HttpClient { client })
    }
}

const fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}
