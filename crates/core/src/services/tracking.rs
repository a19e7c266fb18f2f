//! Campaign and contact tracking reports
//!
//! Both resource groups expose the same six activity feeds plus a summary
//! report under different roots, so one service type serves both.

use ctct_domain::constants::endpoints;
use ctct_domain::resources::{
    BOUNCE_ACTIVITY, CLICK_ACTIVITY, FORWARD_ACTIVITY, OPEN_ACTIVITY, SEND_ACTIVITY, TRACKING_SUMMARY,
    UNSUBSCRIBE_ACTIVITY,
};
use ctct_domain::{FieldSpec, PaginatedResult, QueryParams, Record, Result};
use tracing::instrument;

use super::BaseService;
use crate::response;

/// Endpoint templates of one tracking root.
#[derive(Debug)]
pub struct TrackingPaths {
    pub bounces: &'static str,
    pub clicks: &'static str,
    pub forwards: &'static str,
    pub opens: &'static str,
    pub sends: &'static str,
    pub unsubscribes: &'static str,
    pub summary: &'static str,
}

pub static CAMPAIGN_TRACKING: TrackingPaths = TrackingPaths {
    bounces: endpoints::CAMPAIGN_TRACKING_BOUNCES,
    clicks: endpoints::CAMPAIGN_TRACKING_CLICKS,
    forwards: endpoints::CAMPAIGN_TRACKING_FORWARDS,
    opens: endpoints::CAMPAIGN_TRACKING_OPENS,
    sends: endpoints::CAMPAIGN_TRACKING_SENDS,
    unsubscribes: endpoints::CAMPAIGN_TRACKING_UNSUBSCRIBES,
    summary: endpoints::CAMPAIGN_TRACKING_SUMMARY,
};

pub static CONTACT_TRACKING: TrackingPaths = TrackingPaths {
    bounces: endpoints::CONTACT_TRACKING_BOUNCES,
    clicks: endpoints::CONTACT_TRACKING_CLICKS,
    forwards: endpoints::CONTACT_TRACKING_FORWARDS,
    opens: endpoints::CONTACT_TRACKING_OPENS,
    sends: endpoints::CONTACT_TRACKING_SENDS,
    unsubscribes: endpoints::CONTACT_TRACKING_UNSUBSCRIBES,
    summary: endpoints::CONTACT_TRACKING_SUMMARY,
};

/// Tracking service bound to a campaign or contact root.
///
/// Feed methods accept `limit`, `created_since` and `next`. The `id`
/// argument is the campaign id or the contact id depending on the root.
#[derive(Clone)]
pub struct TrackingService {
    base: BaseService,
    paths: &'static TrackingPaths,
}

impl TrackingService {
    pub fn campaign(base: BaseService) -> Self {
        Self { base, paths: &CAMPAIGN_TRACKING }
    }

    pub fn contact(base: BaseService) -> Self {
        Self { base, paths: &CONTACT_TRACKING }
    }

    pub fn paths(&self) -> &'static TrackingPaths {
        self.paths
    }

    #[instrument(skip(self, access_token))]
    pub async fn get_bounces(&self, access_token: &str, id: &str, params: &QueryParams) -> Result<PaginatedResult> {
        self.feed(access_token, self.paths.bounces, id, params, &BOUNCE_ACTIVITY).await
    }

    #[instrument(skip(self, access_token))]
    pub async fn get_clicks(&self, access_token: &str, id: &str, params: &QueryParams) -> Result<PaginatedResult> {
        self.feed(access_token, self.paths.clicks, id, params, &CLICK_ACTIVITY).await
    }

    #[instrument(skip(self, access_token))]
    pub async fn get_forwards(&self, access_token: &str, id: &str, params: &QueryParams) -> Result<PaginatedResult> {
        self.feed(access_token, self.paths.forwards, id, params, &FORWARD_ACTIVITY).await
    }

    #[instrument(skip(self, access_token))]
    pub async fn get_opens(&self, access_token: &str, id: &str, params: &QueryParams) -> Result<PaginatedResult> {
        self.feed(access_token, self.paths.opens, id, params, &OPEN_ACTIVITY).await
    }

    #[instrument(skip(self, access_token))]
    pub async fn get_sends(&self, access_token: &str, id: &str, params: &QueryParams) -> Result<PaginatedResult> {
        self.feed(access_token, self.paths.sends, id, params, &SEND_ACTIVITY).await
    }

    #[instrument(skip(self, access_token))]
    pub async fn get_unsubscribes(
        &self,
        access_token: &str,
        id: &str,
        params: &QueryParams,
    ) -> Result<PaginatedResult> {
        self.feed(access_token, self.paths.unsubscribes, id, params, &UNSUBSCRIBE_ACTIVITY).await
    }

    /// Aggregate counts (sends, opens, clicks, ...).
    #[instrument(skip(self, access_token))]
    pub async fn get_summary(&self, access_token: &str, id: &str) -> Result<Record> {
        let raw = self.base.get(access_token, self.paths.summary, &[id], &QueryParams::new()).await?;
        response::record(&raw, &TRACKING_SUMMARY)
    }

    async fn feed(
        &self,
        access_token: &str,
        template: &str,
        id: &str,
        params: &QueryParams,
        spec: &FieldSpec,
    ) -> Result<PaginatedResult> {
        let raw = self.base.get(access_token, template, &[id], params).await?;
        response::tracking_page(&raw, spec)
    }
}
