//! Resource services
//!
//! One service per API resource group. Each operation builds a single
//! request, executes it over the [`HttpTransport`] port and classifies the
//! response. Services hold only immutable state and are safe to share.

pub mod account;
pub mod activities;
pub mod campaign_schedule;
pub mod campaigns;
pub mod contacts;
pub mod lists;
pub mod tracking;

use std::sync::Arc;

use ctct_domain::constants::DEFAULT_BASE_URL;
use ctct_domain::{CtctError, FieldSpec, QueryParams, Record, Result};
use serde::Serialize;
use tracing::debug;

use crate::mapper::to_wire_with_spec;
use crate::multipart::Multipart;
use crate::ports::{HttpTransport, RawResponse};
use crate::request::{build_url, HttpMethod, RequestDescriptor};

pub use account::AccountService;
pub use activities::ActivityService;
pub use campaign_schedule::CampaignScheduleService;
pub use campaigns::EmailMarketingService;
pub use contacts::ContactService;
pub use lists::ListService;
pub use tracking::TrackingService;

/// State and request plumbing shared by every service.
#[derive(Clone)]
pub struct BaseService {
    api_key: String,
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl BaseService {
    pub fn new(api_key: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self { api_key: api_key.into(), base_url: DEFAULT_BASE_URL.to_string(), transport }
    }

    /// Point requests at another API root. A missing trailing `/` is added.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint template.
    ///
    /// # Errors
    ///
    /// See [`build_url`].
    pub fn url(&self, template: &str, path_args: &[&str], query: &QueryParams) -> Result<String> {
        build_url(&self.base_url, template, path_args, query, &self.api_key)
    }

    pub(crate) async fn get(
        &self,
        access_token: &str,
        template: &str,
        path_args: &[&str],
        query: &QueryParams,
    ) -> Result<RawResponse> {
        let url = self.url(template, path_args, query)?;
        self.execute(RequestDescriptor::json(HttpMethod::Get, url, access_token, None)).await
    }

    pub(crate) async fn delete(&self, access_token: &str, template: &str, path_args: &[&str]) -> Result<RawResponse> {
        let url = self.url(template, path_args, &QueryParams::new())?;
        self.execute(RequestDescriptor::json(HttpMethod::Delete, url, access_token, None)).await
    }

    /// Send `record` serialized with `spec`'s server-managed fields removed.
    pub(crate) async fn send_record(
        &self,
        method: HttpMethod,
        access_token: &str,
        endpoint: Endpoint<'_>,
        record: &Record,
        spec: &FieldSpec,
    ) -> Result<RawResponse> {
        let body = to_wire_with_spec(record, spec).to_string();
        self.send_body(method, access_token, endpoint, body).await
    }

    /// Send a typed payload as JSON.
    pub(crate) async fn send_json<T: Serialize + Sync>(
        &self,
        method: HttpMethod,
        access_token: &str,
        endpoint: Endpoint<'_>,
        payload: &T,
    ) -> Result<RawResponse> {
        let body = serde_json::to_string(payload)
            .map_err(|e| CtctError::Encoding(format!("failed to serialize request body: {e}")))?;
        self.send_body(method, access_token, endpoint, body).await
    }

    pub(crate) async fn upload(&self, access_token: &str, template: &str, multipart: Multipart) -> Result<RawResponse> {
        let url = self.url(template, &[], &QueryParams::new())?;
        self.execute(RequestDescriptor::multipart(url, access_token, multipart)).await
    }

    async fn send_body(
        &self,
        method: HttpMethod,
        access_token: &str,
        endpoint: Endpoint<'_>,
        body: String,
    ) -> Result<RawResponse> {
        let url = self.url(endpoint.template, endpoint.path_args, endpoint.query)?;
        self.execute(RequestDescriptor::json(method, url, access_token, Some(body))).await
    }

    async fn execute(&self, request: RequestDescriptor) -> Result<RawResponse> {
        let method = request.method;
        let url = request.redacted_url().to_string();
        debug!(%method, %url, "sending request");

        let response = self.transport.execute(request).await?;

        debug!(%method, %url, status = response.status, "received response");
        Ok(response)
    }
}

/// Endpoint template, its path arguments and extra query parameters.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Endpoint<'a> {
    pub template: &'a str,
    pub path_args: &'a [&'a str],
    pub query: &'a QueryParams,
}

impl<'a> Endpoint<'a> {
    pub(crate) const fn new(template: &'a str, path_args: &'a [&'a str], query: &'a QueryParams) -> Self {
        Self { template, path_args, query }
    }
}

/// Id of a record about to be updated.
pub(crate) fn record_id(record: &Record, resource: &str) -> Result<String> {
    record
        .id()
        .ok_or_else(|| CtctError::InvalidArgument(format!("{resource} must have an id to be updated")))
}
