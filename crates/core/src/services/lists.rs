//! Contact list operations

use ctct_domain::constants::endpoints;
use ctct_domain::resources::{CONTACT, CONTACT_LIST};
use ctct_domain::{PaginatedResult, QueryParams, Record, Result};
use tracing::{info, instrument};

use super::{record_id, BaseService, Endpoint};
use crate::request::HttpMethod;
use crate::response;

/// Lists service
#[derive(Clone)]
pub struct ListService {
    base: BaseService,
}

impl ListService {
    pub fn new(base: BaseService) -> Self {
        Self { base }
    }

    /// Every list in the account; supports `modified_since`.
    #[instrument(skip(self, access_token))]
    pub async fn get_lists(&self, access_token: &str, params: &QueryParams) -> Result<Vec<Record>> {
        let raw = self.base.get(access_token, endpoints::LISTS, &[], params).await?;
        response::records(&raw, &CONTACT_LIST)
    }

    #[instrument(skip(self, access_token))]
    pub async fn get_list(&self, access_token: &str, list_id: &str) -> Result<Record> {
        let raw = self.base.get(access_token, endpoints::LIST, &[list_id], &QueryParams::new()).await?;
        response::record(&raw, &CONTACT_LIST)
    }

    #[instrument(skip(self, access_token, list))]
    pub async fn add_list(&self, access_token: &str, list: &Record) -> Result<Record> {
        let query = QueryParams::new();
        let endpoint = Endpoint::new(endpoints::LISTS, &[], &query);
        let raw = self.base.send_record(HttpMethod::Post, access_token, endpoint, list, &CONTACT_LIST).await?;
        let created = response::record(&raw, &CONTACT_LIST)?;
        info!(list_id = ?created.id(), "list created");
        Ok(created)
    }

    #[instrument(skip(self, access_token, list))]
    pub async fn update_list(&self, access_token: &str, list: &Record) -> Result<Record> {
        let id = record_id(list, CONTACT_LIST.name)?;
        let path = [id.as_str()];
        let query = QueryParams::new();
        let endpoint = Endpoint::new(endpoints::LIST, &path, &query);
        let raw = self.base.send_record(HttpMethod::Put, access_token, endpoint, list, &CONTACT_LIST).await?;
        let updated = response::record(&raw, &CONTACT_LIST)?;
        info!(list_id = %id, "list updated");
        Ok(updated)
    }

    /// One page of the contacts on a list; supports `limit`,
    /// `modified_since` and `next`.
    #[instrument(skip(self, access_token))]
    pub async fn get_contacts_from_list(
        &self,
        access_token: &str,
        list_id: &str,
        params: &QueryParams,
    ) -> Result<PaginatedResult> {
        let raw = self.base.get(access_token, endpoints::LIST_CONTACTS, &[list_id], params).await?;
        response::page(&raw, &CONTACT)
    }
}
