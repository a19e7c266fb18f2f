//! Campaign schedules and test sends

use ctct_domain::constants::endpoints;
use ctct_domain::resources::{SCHEDULE, TEST_SEND};
use ctct_domain::types::TestSend;
use ctct_domain::{QueryParams, Record, Result};
use tracing::{info, instrument};

use super::{record_id, BaseService, Endpoint};
use crate::request::HttpMethod;
use crate::response;

/// Campaign schedule service
#[derive(Clone)]
pub struct CampaignScheduleService {
    base: BaseService,
}

impl CampaignScheduleService {
    pub fn new(base: BaseService) -> Self {
        Self { base }
    }

    #[instrument(skip(self, access_token, schedule))]
    pub async fn add_schedule(&self, access_token: &str, campaign_id: &str, schedule: &Record) -> Result<Record> {
        let path = [campaign_id];
        let query = QueryParams::new();
        let endpoint = Endpoint::new(endpoints::CAMPAIGN_SCHEDULES, &path, &query);
        let raw = self.base.send_record(HttpMethod::Post, access_token, endpoint, schedule, &SCHEDULE).await?;
        let created = response::record(&raw, &SCHEDULE)?;
        info!(schedule_id = ?created.id(), "schedule created");
        Ok(created)
    }

    #[instrument(skip(self, access_token))]
    pub async fn get_schedules(&self, access_token: &str, campaign_id: &str) -> Result<Vec<Record>> {
        let raw =
            self.base.get(access_token, endpoints::CAMPAIGN_SCHEDULES, &[campaign_id], &QueryParams::new()).await?;
        response::records(&raw, &SCHEDULE)
    }

    #[instrument(skip(self, access_token))]
    pub async fn get_schedule(&self, access_token: &str, campaign_id: &str, schedule_id: &str) -> Result<Record> {
        let path = [campaign_id, schedule_id];
        let raw = self.base.get(access_token, endpoints::CAMPAIGN_SCHEDULE, &path, &QueryParams::new()).await?;
        response::record(&raw, &SCHEDULE)
    }

    /// Replace a schedule; `schedule` must carry its `id`.
    #[instrument(skip(self, access_token, schedule))]
    pub async fn update_schedule(&self, access_token: &str, campaign_id: &str, schedule: &Record) -> Result<Record> {
        let schedule_id = record_id(schedule, SCHEDULE.name)?;
        let path = [campaign_id, schedule_id.as_str()];
        let query = QueryParams::new();
        let endpoint = Endpoint::new(endpoints::CAMPAIGN_SCHEDULE, &path, &query);
        let raw = self.base.send_record(HttpMethod::Put, access_token, endpoint, schedule, &SCHEDULE).await?;
        let updated = response::record(&raw, &SCHEDULE)?;
        info!(%schedule_id, "schedule updated");
        Ok(updated)
    }

    #[instrument(skip(self, access_token))]
    pub async fn delete_schedule(&self, access_token: &str, campaign_id: &str, schedule_id: &str) -> Result<()> {
        let raw = self.base.delete(access_token, endpoints::CAMPAIGN_SCHEDULE, &[campaign_id, schedule_id]).await?;
        response::deleted(&raw)?;
        info!("schedule deleted");
        Ok(())
    }

    /// Send a test of the campaign to the addresses in `test_send`.
    #[instrument(skip(self, access_token, test_send))]
    pub async fn send_test(&self, access_token: &str, campaign_id: &str, test_send: &TestSend) -> Result<Record> {
        let path = [campaign_id];
        let query = QueryParams::new();
        let endpoint = Endpoint::new(endpoints::CAMPAIGN_TEST_SENDS, &path, &query);
        let raw = self.base.send_json(HttpMethod::Post, access_token, endpoint, test_send).await?;
        let sent = response::record(&raw, &TEST_SEND)?;
        info!(recipients = test_send.email_addresses.len(), "test send queued");
        Ok(sent)
    }
}
