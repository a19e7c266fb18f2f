//! Email campaign operations

use ctct_domain::constants::endpoints;
use ctct_domain::resources::{CAMPAIGN, CAMPAIGN_SUMMARY};
use ctct_domain::{PaginatedResult, QueryParams, Record, Result};
use tracing::{info, instrument};

use super::{record_id, BaseService, Endpoint};
use crate::request::HttpMethod;
use crate::response;

/// Email marketing service
#[derive(Clone)]
pub struct EmailMarketingService {
    base: BaseService,
}

impl EmailMarketingService {
    pub fn new(base: BaseService) -> Self {
        Self { base }
    }

    /// One page of campaign summaries (`id`, `name`, `status`,
    /// `modified_date`). Supports `limit`, `modified_since`, `status` and
    /// `next`.
    #[instrument(skip(self, access_token))]
    pub async fn get_campaigns(&self, access_token: &str, params: &QueryParams) -> Result<PaginatedResult> {
        let raw = self.base.get(access_token, endpoints::CAMPAIGNS, &[], params).await?;
        response::page(&raw, &CAMPAIGN_SUMMARY)
    }

    #[instrument(skip(self, access_token))]
    pub async fn get_campaign(&self, access_token: &str, campaign_id: &str) -> Result<Record> {
        let raw = self.base.get(access_token, endpoints::CAMPAIGN, &[campaign_id], &QueryParams::new()).await?;
        response::record(&raw, &CAMPAIGN)
    }

    /// Create a campaign. Server-managed fields are stripped from the body,
    /// as are descriptive fields of `sent_to_contact_lists` entries.
    #[instrument(skip(self, access_token, campaign))]
    pub async fn add_campaign(&self, access_token: &str, campaign: &Record) -> Result<Record> {
        let query = QueryParams::new();
        let endpoint = Endpoint::new(endpoints::CAMPAIGNS, &[], &query);
        let raw = self.base.send_record(HttpMethod::Post, access_token, endpoint, campaign, &CAMPAIGN).await?;
        let created = response::record(&raw, &CAMPAIGN)?;
        info!(campaign_id = ?created.id(), "campaign created");
        Ok(created)
    }

    #[instrument(skip(self, access_token, campaign))]
    pub async fn update_campaign(&self, access_token: &str, campaign: &Record) -> Result<Record> {
        let id = record_id(campaign, CAMPAIGN.name)?;
        let path = [id.as_str()];
        let query = QueryParams::new();
        let endpoint = Endpoint::new(endpoints::CAMPAIGN, &path, &query);
        let raw = self.base.send_record(HttpMethod::Put, access_token, endpoint, campaign, &CAMPAIGN).await?;
        let updated = response::record(&raw, &CAMPAIGN)?;
        info!(campaign_id = %id, "campaign updated");
        Ok(updated)
    }

    #[instrument(skip(self, access_token))]
    pub async fn delete_campaign(&self, access_token: &str, campaign_id: &str) -> Result<()> {
        let raw = self.base.delete(access_token, endpoints::CAMPAIGN, &[campaign_id]).await?;
        response::deleted(&raw)?;
        info!("campaign deleted");
        Ok(())
    }
}
