//! Bulk activities
//!
//! Imports, exports and list maintenance run asynchronously on the server;
//! every call returns the queued activity record.

use ctct_domain::constants::endpoints;
use ctct_domain::resources::ACTIVITY;
use ctct_domain::types::{AddContacts, ClearLists, ExportContacts, RemoveContactsFromLists};
use ctct_domain::{QueryParams, Record, Result};
use serde::Serialize;
use tracing::{info, instrument};

use super::{BaseService, Endpoint};
use crate::multipart::build_multipart;
use crate::request::HttpMethod;
use crate::response;

/// Activity service
#[derive(Clone)]
pub struct ActivityService {
    base: BaseService,
}

impl ActivityService {
    pub fn new(base: BaseService) -> Self {
        Self { base }
    }

    /// Recent activities; supports `status` and `type`.
    #[instrument(skip(self, access_token))]
    pub async fn get_activities(&self, access_token: &str, params: &QueryParams) -> Result<Vec<Record>> {
        let raw = self.base.get(access_token, endpoints::ACTIVITIES, &[], params).await?;
        response::records(&raw, &ACTIVITY)
    }

    #[instrument(skip(self, access_token))]
    pub async fn get_activity(&self, access_token: &str, activity_id: &str) -> Result<Record> {
        let raw = self.base.get(access_token, endpoints::ACTIVITY, &[activity_id], &QueryParams::new()).await?;
        response::record(&raw, &ACTIVITY)
    }

    #[instrument(skip(self, access_token, add_contacts), fields(rows = add_contacts.import_data.len()))]
    pub async fn create_add_contacts_activity(&self, access_token: &str, add_contacts: &AddContacts) -> Result<Record> {
        self.post(access_token, endpoints::ADD_CONTACTS_ACTIVITY, add_contacts).await
    }

    /// Import contacts from a CSV/TXT/XLS file into `lists`.
    #[instrument(skip(self, access_token, contents), fields(bytes = contents.len()))]
    pub async fn create_add_contacts_activity_from_file(
        &self,
        access_token: &str,
        file_name: &str,
        contents: &[u8],
        lists: &[String],
    ) -> Result<Record> {
        self.upload(access_token, endpoints::ADD_CONTACTS_ACTIVITY, file_name, contents, lists).await
    }

    #[instrument(skip(self, access_token))]
    pub async fn add_clear_lists_activity(&self, access_token: &str, lists: &[String]) -> Result<Record> {
        let body = ClearLists { lists: lists.to_vec() };
        self.post(access_token, endpoints::CLEAR_LISTS_ACTIVITY, &body).await
    }

    #[instrument(skip(self, access_token))]
    pub async fn add_export_contacts_activity(
        &self,
        access_token: &str,
        export_contacts: &ExportContacts,
    ) -> Result<Record> {
        self.post(access_token, endpoints::EXPORT_CONTACTS_ACTIVITY, export_contacts).await
    }

    #[instrument(skip(self, access_token, email_addresses), fields(emails = email_addresses.len()))]
    pub async fn add_remove_contacts_from_lists_activity(
        &self,
        access_token: &str,
        email_addresses: &[String],
        lists: &[String],
    ) -> Result<Record> {
        let body = RemoveContactsFromLists::new(email_addresses.to_vec(), lists.to_vec());
        self.post(access_token, endpoints::REMOVE_FROM_LISTS_ACTIVITY, &body).await
    }

    #[instrument(skip(self, access_token, contents), fields(bytes = contents.len()))]
    pub async fn add_remove_contacts_from_lists_activity_from_file(
        &self,
        access_token: &str,
        file_name: &str,
        contents: &[u8],
        lists: &[String],
    ) -> Result<Record> {
        self.upload(access_token, endpoints::REMOVE_FROM_LISTS_ACTIVITY, file_name, contents, lists).await
    }

    async fn post<T: Serialize + Sync>(&self, access_token: &str, template: &str, body: &T) -> Result<Record> {
        let query = QueryParams::new();
        let endpoint = Endpoint::new(template, &[], &query);
        let raw = self.base.send_json(HttpMethod::Post, access_token, endpoint, body).await?;
        let activity = response::record(&raw, &ACTIVITY)?;
        info!(activity_id = ?activity.id(), "activity queued");
        Ok(activity)
    }

    async fn upload(
        &self,
        access_token: &str,
        template: &str,
        file_name: &str,
        contents: &[u8],
        lists: &[String],
    ) -> Result<Record> {
        let lists = lists.join(",");
        let multipart = build_multipart(&[("file_name", file_name), ("lists", &lists)], "data", contents)?;
        let raw = self.base.upload(access_token, template, multipart).await?;
        let activity = response::record(&raw, &ACTIVITY)?;
        info!(activity_id = ?activity.id(), "file activity queued");
        Ok(activity)
    }
}
