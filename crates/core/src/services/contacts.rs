//! Contact operations

use ctct_domain::constants::endpoints;
use ctct_domain::resources::CONTACT;
use ctct_domain::{PaginatedResult, QueryParams, Record, Result};
use tracing::{info, instrument};

use super::{record_id, BaseService, Endpoint};
use crate::request::HttpMethod;
use crate::response;

/// Contacts service
#[derive(Clone)]
pub struct ContactService {
    base: BaseService,
}

impl ContactService {
    pub fn new(base: BaseService) -> Self {
        Self { base }
    }

    /// One page of contacts. Supports `email`, `limit`, `modified_since`,
    /// `status` and `next`.
    #[instrument(skip(self, access_token))]
    pub async fn get_contacts(&self, access_token: &str, params: &QueryParams) -> Result<PaginatedResult> {
        let raw = self.base.get(access_token, endpoints::CONTACTS, &[], params).await?;
        response::page(&raw, &CONTACT)
    }

    #[instrument(skip(self, access_token))]
    pub async fn get_contact(&self, access_token: &str, contact_id: &str) -> Result<Record> {
        let raw = self.base.get(access_token, endpoints::CONTACT, &[contact_id], &QueryParams::new()).await?;
        response::record(&raw, &CONTACT)
    }

    #[instrument(skip(self, access_token, contact))]
    pub async fn add_contact(&self, access_token: &str, contact: &Record, params: &QueryParams) -> Result<Record> {
        let endpoint = Endpoint::new(endpoints::CONTACTS, &[], params);
        let raw = self.base.send_record(HttpMethod::Post, access_token, endpoint, contact, &CONTACT).await?;
        let created = response::record(&raw, &CONTACT)?;
        info!(contact_id = ?created.id(), "contact created");
        Ok(created)
    }

    /// Replace a contact; `contact` must carry its `id`.
    #[instrument(skip(self, access_token, contact))]
    pub async fn update_contact(&self, access_token: &str, contact: &Record, params: &QueryParams) -> Result<Record> {
        let id = record_id(contact, CONTACT.name)?;
        let path = [id.as_str()];
        let endpoint = Endpoint::new(endpoints::CONTACT, &path, params);
        let raw = self.base.send_record(HttpMethod::Put, access_token, endpoint, contact, &CONTACT).await?;
        let updated = response::record(&raw, &CONTACT)?;
        info!(contact_id = %id, "contact updated");
        Ok(updated)
    }

    /// Set a contact to `REMOVED` status.
    #[instrument(skip(self, access_token))]
    pub async fn delete_contact(&self, access_token: &str, contact_id: &str) -> Result<()> {
        let raw = self.base.delete(access_token, endpoints::CONTACT, &[contact_id]).await?;
        response::deleted(&raw)?;
        info!("contact deleted");
        Ok(())
    }

    /// Remove a contact from every list it belongs to.
    #[instrument(skip(self, access_token))]
    pub async fn delete_contact_from_lists(&self, access_token: &str, contact_id: &str) -> Result<()> {
        let raw = self.base.delete(access_token, endpoints::CONTACT_LISTS, &[contact_id]).await?;
        response::deleted(&raw)?;
        info!("contact removed from all lists");
        Ok(())
    }

    #[instrument(skip(self, access_token))]
    pub async fn delete_contact_from_list(&self, access_token: &str, contact_id: &str, list_id: &str) -> Result<()> {
        let raw = self.base.delete(access_token, endpoints::CONTACT_LIST, &[contact_id, list_id]).await?;
        response::deleted(&raw)?;
        info!("contact removed from list");
        Ok(())
    }
}
