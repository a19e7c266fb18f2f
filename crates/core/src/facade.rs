//! Single entry point over every resource service
//!
//! [`ConstantContact`] owns one service per resource group, all sharing the
//! same api key and transport. Operations that address a single resource
//! take anything convertible into an [`EntityRef`] (an integer id, an
//! integer-like string or the record itself) and fail with
//! [`ctct_domain::CtctError::InvalidArgument`] before any request is sent
//! when no id can be extracted.

use std::sync::Arc;

use ctct_domain::resources::{CAMPAIGN, CONTACT, CONTACT_LIST, SCHEDULE};
use ctct_domain::types::{AddContacts, ExportContacts, TestSend};
use ctct_domain::{EntityRef, PaginatedResult, QueryParams, Record, Result};

use crate::ports::HttpTransport;
use crate::services::{
    AccountService, ActivityService, BaseService, CampaignScheduleService, ContactService, EmailMarketingService,
    ListService, TrackingService,
};

/// Constant Contact v2 client.
#[derive(Clone)]
pub struct ConstantContact {
    contacts: ContactService,
    lists: ListService,
    email_marketing: EmailMarketingService,
    campaign_schedules: CampaignScheduleService,
    campaign_tracking: TrackingService,
    contact_tracking: TrackingService,
    activities: ActivityService,
    account: AccountService,
}

impl ConstantContact {
    /// Client against the production API root.
    pub fn new(api_key: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self::from_base(&BaseService::new(api_key, transport))
    }

    /// Client against another API root (a sandbox or a local mock).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self::from_base(&BaseService::new(api_key, transport).with_base_url(base_url))
    }

    fn from_base(base: &BaseService) -> Self {
        Self {
            contacts: ContactService::new(base.clone()),
            lists: ListService::new(base.clone()),
            email_marketing: EmailMarketingService::new(base.clone()),
            campaign_schedules: CampaignScheduleService::new(base.clone()),
            campaign_tracking: TrackingService::campaign(base.clone()),
            contact_tracking: TrackingService::contact(base.clone()),
            activities: ActivityService::new(base.clone()),
            account: AccountService::new(base.clone()),
        }
    }

    pub fn contact_service(&self) -> &ContactService {
        &self.contacts
    }

    pub fn list_service(&self) -> &ListService {
        &self.lists
    }

    pub fn email_marketing_service(&self) -> &EmailMarketingService {
        &self.email_marketing
    }

    pub fn campaign_schedule_service(&self) -> &CampaignScheduleService {
        &self.campaign_schedules
    }

    pub fn campaign_tracking_service(&self) -> &TrackingService {
        &self.campaign_tracking
    }

    pub fn contact_tracking_service(&self) -> &TrackingService {
        &self.contact_tracking
    }

    pub fn activity_service(&self) -> &ActivityService {
        &self.activities
    }

    pub fn account_service(&self) -> &AccountService {
        &self.account
    }

    // Contacts

    /// One page of contacts. Use [`QueryParams::determine`] to pass a raw
    /// `"?limit=..&next=.."` string or a bare page size.
    pub async fn get_contacts(&self, access_token: &str, params: &QueryParams) -> Result<PaginatedResult> {
        self.contacts.get_contacts(access_token, params).await
    }

    pub async fn get_contact(&self, access_token: &str, contact: impl Into<EntityRef>) -> Result<Record> {
        let id = contact.into().resolve(CONTACT.name)?;
        self.contacts.get_contact(access_token, &id).await
    }

    /// Contacts whose address matches `email` (a page of zero or one).
    pub async fn get_contact_by_email(&self, access_token: &str, email: &str) -> Result<PaginatedResult> {
        self.contacts.get_contacts(access_token, &QueryParams::new().email(email)).await
    }

    /// Create a contact. With `action_by_visitor` the change is attributed
    /// to the contact, which triggers the welcome email.
    pub async fn add_contact(&self, access_token: &str, contact: &Record, action_by_visitor: bool) -> Result<Record> {
        self.contacts.add_contact(access_token, contact, &visitor_params(action_by_visitor)).await
    }

    pub async fn update_contact(
        &self,
        access_token: &str,
        contact: &Record,
        action_by_visitor: bool,
    ) -> Result<Record> {
        self.contacts.update_contact(access_token, contact, &visitor_params(action_by_visitor)).await
    }

    /// Set the contact to `REMOVED` status.
    pub async fn delete_contact(&self, access_token: &str, contact: impl Into<EntityRef>) -> Result<()> {
        let id = contact.into().resolve(CONTACT.name)?;
        self.contacts.delete_contact(access_token, &id).await
    }

    pub async fn delete_contact_from_lists(&self, access_token: &str, contact: impl Into<EntityRef>) -> Result<()> {
        let id = contact.into().resolve(CONTACT.name)?;
        self.contacts.delete_contact_from_lists(access_token, &id).await
    }

    pub async fn delete_contact_from_list(
        &self,
        access_token: &str,
        contact: impl Into<EntityRef>,
        list: impl Into<EntityRef>,
    ) -> Result<()> {
        let contact_id = contact.into().resolve(CONTACT.name)?;
        let list_id = list.into().resolve(CONTACT_LIST.name)?;
        self.contacts.delete_contact_from_list(access_token, &contact_id, &list_id).await
    }

    // Lists

    pub async fn get_lists(&self, access_token: &str, params: &QueryParams) -> Result<Vec<Record>> {
        self.lists.get_lists(access_token, params).await
    }

    pub async fn get_list(&self, access_token: &str, list: impl Into<EntityRef>) -> Result<Record> {
        let id = list.into().resolve(CONTACT_LIST.name)?;
        self.lists.get_list(access_token, &id).await
    }

    pub async fn add_list(&self, access_token: &str, list: &Record) -> Result<Record> {
        self.lists.add_list(access_token, list).await
    }

    pub async fn update_list(&self, access_token: &str, list: &Record) -> Result<Record> {
        self.lists.update_list(access_token, list).await
    }

    pub async fn get_contacts_from_list(
        &self,
        access_token: &str,
        list: impl Into<EntityRef>,
        params: &QueryParams,
    ) -> Result<PaginatedResult> {
        let id = list.into().resolve(CONTACT_LIST.name)?;
        self.lists.get_contacts_from_list(access_token, &id, params).await
    }

    // Email campaigns

    pub async fn get_email_campaigns(&self, access_token: &str, params: &QueryParams) -> Result<PaginatedResult> {
        self.email_marketing.get_campaigns(access_token, params).await
    }

    pub async fn get_email_campaign(&self, access_token: &str, campaign: impl Into<EntityRef>) -> Result<Record> {
        let id = campaign.into().resolve(CAMPAIGN.name)?;
        self.email_marketing.get_campaign(access_token, &id).await
    }

    pub async fn delete_email_campaign(&self, access_token: &str, campaign: impl Into<EntityRef>) -> Result<()> {
        let id = campaign.into().resolve(CAMPAIGN.name)?;
        self.email_marketing.delete_campaign(access_token, &id).await
    }

    pub async fn add_email_campaign(&self, access_token: &str, campaign: &Record) -> Result<Record> {
        self.email_marketing.add_campaign(access_token, campaign).await
    }

    pub async fn update_email_campaign(&self, access_token: &str, campaign: &Record) -> Result<Record> {
        self.email_marketing.update_campaign(access_token, campaign).await
    }

    // Campaign schedules

    pub async fn add_email_campaign_schedule(
        &self,
        access_token: &str,
        campaign: impl Into<EntityRef>,
        schedule: &Record,
    ) -> Result<Record> {
        let id = campaign.into().resolve(CAMPAIGN.name)?;
        self.campaign_schedules.add_schedule(access_token, &id, schedule).await
    }

    pub async fn get_email_campaign_schedules(
        &self,
        access_token: &str,
        campaign: impl Into<EntityRef>,
    ) -> Result<Vec<Record>> {
        let id = campaign.into().resolve(CAMPAIGN.name)?;
        self.campaign_schedules.get_schedules(access_token, &id).await
    }

    pub async fn get_email_campaign_schedule(
        &self,
        access_token: &str,
        campaign: impl Into<EntityRef>,
        schedule: impl Into<EntityRef>,
    ) -> Result<Record> {
        let campaign_id = campaign.into().resolve(CAMPAIGN.name)?;
        let schedule_id = schedule.into().resolve(SCHEDULE.name)?;
        self.campaign_schedules.get_schedule(access_token, &campaign_id, &schedule_id).await
    }

    pub async fn update_email_campaign_schedule(
        &self,
        access_token: &str,
        campaign: impl Into<EntityRef>,
        schedule: &Record,
    ) -> Result<Record> {
        let id = campaign.into().resolve(CAMPAIGN.name)?;
        self.campaign_schedules.update_schedule(access_token, &id, schedule).await
    }

    pub async fn delete_email_campaign_schedule(
        &self,
        access_token: &str,
        campaign: impl Into<EntityRef>,
        schedule: impl Into<EntityRef>,
    ) -> Result<()> {
        let campaign_id = campaign.into().resolve(CAMPAIGN.name)?;
        let schedule_id = schedule.into().resolve(SCHEDULE.name)?;
        self.campaign_schedules.delete_schedule(access_token, &campaign_id, &schedule_id).await
    }

    pub async fn send_email_campaign_test(
        &self,
        access_token: &str,
        campaign: impl Into<EntityRef>,
        test_send: &TestSend,
    ) -> Result<Record> {
        let id = campaign.into().resolve(CAMPAIGN.name)?;
        self.campaign_schedules.send_test(access_token, &id, test_send).await
    }

    // Campaign tracking

    pub async fn get_email_campaign_sends(
        &self,
        access_token: &str,
        campaign: impl Into<EntityRef>,
        params: &QueryParams,
    ) -> Result<PaginatedResult> {
        let id = campaign.into().resolve(CAMPAIGN.name)?;
        self.campaign_tracking.get_sends(access_token, &id, params).await
    }

    pub async fn get_email_campaign_bounces(
        &self,
        access_token: &str,
        campaign: impl Into<EntityRef>,
        params: &QueryParams,
    ) -> Result<PaginatedResult> {
        let id = campaign.into().resolve(CAMPAIGN.name)?;
        self.campaign_tracking.get_bounces(access_token, &id, params).await
    }

    pub async fn get_email_campaign_clicks(
        &self,
        access_token: &str,
        campaign: impl Into<EntityRef>,
        params: &QueryParams,
    ) -> Result<PaginatedResult> {
        let id = campaign.into().resolve(CAMPAIGN.name)?;
        self.campaign_tracking.get_clicks(access_token, &id, params).await
    }

    pub async fn get_email_campaign_opens(
        &self,
        access_token: &str,
        campaign: impl Into<EntityRef>,
        params: &QueryParams,
    ) -> Result<PaginatedResult> {
        let id = campaign.into().resolve(CAMPAIGN.name)?;
        self.campaign_tracking.get_opens(access_token, &id, params).await
    }

    pub async fn get_email_campaign_forwards(
        &self,
        access_token: &str,
        campaign: impl Into<EntityRef>,
        params: &QueryParams,
    ) -> Result<PaginatedResult> {
        let id = campaign.into().resolve(CAMPAIGN.name)?;
        self.campaign_tracking.get_forwards(access_token, &id, params).await
    }

    pub async fn get_email_campaign_unsubscribes(
        &self,
        access_token: &str,
        campaign: impl Into<EntityRef>,
        params: &QueryParams,
    ) -> Result<PaginatedResult> {
        let id = campaign.into().resolve(CAMPAIGN.name)?;
        self.campaign_tracking.get_unsubscribes(access_token, &id, params).await
    }

    pub async fn get_email_campaign_summary_report(
        &self,
        access_token: &str,
        campaign: impl Into<EntityRef>,
    ) -> Result<Record> {
        let id = campaign.into().resolve(CAMPAIGN.name)?;
        self.campaign_tracking.get_summary(access_token, &id).await
    }

    // Contact tracking

    pub async fn get_contact_sends(
        &self,
        access_token: &str,
        contact: impl Into<EntityRef>,
        params: &QueryParams,
    ) -> Result<PaginatedResult> {
        let id = contact.into().resolve(CONTACT.name)?;
        self.contact_tracking.get_sends(access_token, &id, params).await
    }

    pub async fn get_contact_bounces(
        &self,
        access_token: &str,
        contact: impl Into<EntityRef>,
        params: &QueryParams,
    ) -> Result<PaginatedResult> {
        let id = contact.into().resolve(CONTACT.name)?;
        self.contact_tracking.get_bounces(access_token, &id, params).await
    }

    pub async fn get_contact_clicks(
        &self,
        access_token: &str,
        contact: impl Into<EntityRef>,
        params: &QueryParams,
    ) -> Result<PaginatedResult> {
        let id = contact.into().resolve(CONTACT.name)?;
        self.contact_tracking.get_clicks(access_token, &id, params).await
    }

    pub async fn get_contact_opens(
        &self,
        access_token: &str,
        contact: impl Into<EntityRef>,
        params: &QueryParams,
    ) -> Result<PaginatedResult> {
        let id = contact.into().resolve(CONTACT.name)?;
        self.contact_tracking.get_opens(access_token, &id, params).await
    }

    pub async fn get_contact_forwards(
        &self,
        access_token: &str,
        contact: impl Into<EntityRef>,
        params: &QueryParams,
    ) -> Result<PaginatedResult> {
        let id = contact.into().resolve(CONTACT.name)?;
        self.contact_tracking.get_forwards(access_token, &id, params).await
    }

    pub async fn get_contact_unsubscribes(
        &self,
        access_token: &str,
        contact: impl Into<EntityRef>,
        params: &QueryParams,
    ) -> Result<PaginatedResult> {
        let id = contact.into().resolve(CONTACT.name)?;
        self.contact_tracking.get_unsubscribes(access_token, &id, params).await
    }

    pub async fn get_contact_summary_report(&self, access_token: &str, contact: impl Into<EntityRef>) -> Result<Record> {
        let id = contact.into().resolve(CONTACT.name)?;
        self.contact_tracking.get_summary(access_token, &id).await
    }

    // Account

    /// Verified sender addresses, optionally filtered by `status`.
    pub async fn get_verified_email_addresses(&self, access_token: &str, status: Option<&str>) -> Result<Vec<Record>> {
        let params = status.map_or_else(QueryParams::new, |status| QueryParams::new().status(status));
        self.account.get_verified_email_addresses(access_token, &params).await
    }

    // Activities

    pub async fn get_activities(&self, access_token: &str, params: &QueryParams) -> Result<Vec<Record>> {
        self.activities.get_activities(access_token, params).await
    }

    /// Activity ids are opaque strings, not integers.
    pub async fn get_activity(&self, access_token: &str, activity_id: &str) -> Result<Record> {
        self.activities.get_activity(access_token, activity_id).await
    }

    pub async fn add_create_contacts_activity(&self, access_token: &str, add_contacts: &AddContacts) -> Result<Record> {
        self.activities.create_add_contacts_activity(access_token, add_contacts).await
    }

    pub async fn add_create_contacts_activity_from_file(
        &self,
        access_token: &str,
        file_name: &str,
        contents: &[u8],
        lists: &[String],
    ) -> Result<Record> {
        self.activities.create_add_contacts_activity_from_file(access_token, file_name, contents, lists).await
    }

    pub async fn add_clear_lists_activity(&self, access_token: &str, lists: &[String]) -> Result<Record> {
        self.activities.add_clear_lists_activity(access_token, lists).await
    }

    pub async fn add_remove_contacts_from_lists_activity(
        &self,
        access_token: &str,
        email_addresses: &[String],
        lists: &[String],
    ) -> Result<Record> {
        self.activities.add_remove_contacts_from_lists_activity(access_token, email_addresses, lists).await
    }

    pub async fn add_remove_contacts_from_lists_activity_from_file(
        &self,
        access_token: &str,
        file_name: &str,
        contents: &[u8],
        lists: &[String],
    ) -> Result<Record> {
        self.activities
            .add_remove_contacts_from_lists_activity_from_file(access_token, file_name, contents, lists)
            .await
    }

    pub async fn add_export_contacts_activity(
        &self,
        access_token: &str,
        export_contacts: &ExportContacts,
    ) -> Result<Record> {
        self.activities.add_export_contacts_activity(access_token, export_contacts).await
    }
}

fn visitor_params(action_by_visitor: bool) -> QueryParams {
    if action_by_visitor {
        QueryParams::new().action_by_visitor()
    } else {
        QueryParams::new()
    }
}
