//! API constants
//!
//! Endpoint templates, OAuth endpoints and bulk-activity column names.
//! Templates use `%s` placeholders filled positionally by the request builder.

/// Root of every v2 REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.constantcontact.com/v2/";

/// Default request timeout applied by the HTTP transport.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_USER_AGENT: &str = concat!("ctct-rust/", env!("CARGO_PKG_VERSION"));

/// Template for [`crate::CtctError::InvalidArgument`] raised by entity-or-id arguments.
pub const ID_OR_OBJECT_ERROR: &str = "Only an id or %s object are allowed for this method.";

/// Render [`ID_OR_OBJECT_ERROR`] for a resource name.
pub fn id_or_object_message(resource: &str) -> String {
    ID_OR_OBJECT_ERROR.replacen("%s", resource, 1)
}

/// REST endpoint templates relative to the base URL.
pub mod endpoints {
    pub const ACCOUNT_VERIFIED_ADDRESSES: &str = "account/verifiedemailaddresses";

    pub const ACTIVITIES: &str = "activities";
    pub const ACTIVITY: &str = "activities/%s";
    pub const ADD_CONTACTS_ACTIVITY: &str = "activities/addcontacts";
    pub const CLEAR_LISTS_ACTIVITY: &str = "activities/clearlists";
    pub const EXPORT_CONTACTS_ACTIVITY: &str = "activities/exportcontacts";
    pub const REMOVE_FROM_LISTS_ACTIVITY: &str = "activities/removefromlists";

    pub const CONTACTS: &str = "contacts";
    pub const CONTACT: &str = "contacts/%s";
    pub const CONTACT_LISTS: &str = "contacts/%s/lists";
    pub const CONTACT_LIST: &str = "contacts/%s/lists/%s";

    pub const LISTS: &str = "lists";
    pub const LIST: &str = "lists/%s";
    pub const LIST_CONTACTS: &str = "lists/%s/contacts";

    pub const CAMPAIGNS: &str = "emailmarketing/campaigns";
    pub const CAMPAIGN: &str = "emailmarketing/campaigns/%s";
    pub const CAMPAIGN_SCHEDULES: &str = "emailmarketing/campaigns/%s/schedules";
    pub const CAMPAIGN_SCHEDULE: &str = "emailmarketing/campaigns/%s/schedules/%s";
    pub const CAMPAIGN_TEST_SENDS: &str = "emailmarketing/campaigns/%s/tests";

    pub const CAMPAIGN_TRACKING_SUMMARY: &str = "emailmarketing/campaigns/%s/tracking/reports/summary";
    pub const CAMPAIGN_TRACKING_BOUNCES: &str = "emailmarketing/campaigns/%s/tracking/bounces";
    pub const CAMPAIGN_TRACKING_CLICKS: &str = "emailmarketing/campaigns/%s/tracking/clicks";
    pub const CAMPAIGN_TRACKING_FORWARDS: &str = "emailmarketing/campaigns/%s/tracking/forwards";
    pub const CAMPAIGN_TRACKING_OPENS: &str = "emailmarketing/campaigns/%s/tracking/opens";
    pub const CAMPAIGN_TRACKING_SENDS: &str = "emailmarketing/campaigns/%s/tracking/sends";
    pub const CAMPAIGN_TRACKING_UNSUBSCRIBES: &str = "emailmarketing/campaigns/%s/tracking/unsubscribes";

    pub const CONTACT_TRACKING_SUMMARY: &str = "contacts/%s/tracking/reports/summary";
    pub const CONTACT_TRACKING_BOUNCES: &str = "contacts/%s/tracking/bounces";
    pub const CONTACT_TRACKING_CLICKS: &str = "contacts/%s/tracking/clicks";
    pub const CONTACT_TRACKING_FORWARDS: &str = "contacts/%s/tracking/forwards";
    pub const CONTACT_TRACKING_OPENS: &str = "contacts/%s/tracking/opens";
    pub const CONTACT_TRACKING_SENDS: &str = "contacts/%s/tracking/sends";
    pub const CONTACT_TRACKING_UNSUBSCRIBES: &str = "contacts/%s/tracking/unsubscribes";
}

/// OAuth2 authorization server.
pub mod oauth {
    pub const BASE_URL: &str = "https://oauth2.constantcontact.com/oauth2/";
    pub const AUTHORIZATION_ENDPOINT: &str = "oauth/siteowner/authorize";
    pub const TOKEN_ENDPOINT: &str = "oauth/token";
    pub const TOKEN_INFO_ENDPOINT: &str = "tokeninfo.htm";

    pub const RESPONSE_TYPE_CODE: &str = "code";
    pub const RESPONSE_TYPE_TOKEN: &str = "token";
    pub const AUTHORIZATION_CODE_GRANT_TYPE: &str = "authorization_code";
}

/// Column headers understood by the add-contacts bulk activity.
pub mod activity_columns {
    pub const EMAIL: &str = "EMAIL";
    pub const FIRST_NAME: &str = "FIRST NAME";
    pub const MIDDLE_NAME: &str = "MIDDLE NAME";
    pub const LAST_NAME: &str = "LAST NAME";
    pub const JOB_TITLE: &str = "JOB TITLE";
    pub const COMPANY_NAME: &str = "COMPANY NAME";
    pub const WORK_PHONE: &str = "WORK PHONE";
    pub const HOME_PHONE: &str = "HOME PHONE";
    pub const ADDRESS1: &str = "ADDRESS LINE 1";
    pub const ADDRESS2: &str = "ADDRESS LINE 2";
    pub const ADDRESS3: &str = "ADDRESS LINE 3";
    pub const CITY: &str = "CITY";
    pub const STATE: &str = "STATE";
    pub const STATE_PROVINCE: &str = "US STATE/CA PROVINCE";
    pub const COUNTRY: &str = "COUNTRY";
    pub const POSTAL_CODE: &str = "ZIP/POSTAL CODE";
    pub const SUB_POSTAL_CODE: &str = "SUB ZIP/POSTAL CODE";

    /// Contact scalar field to column, in column order.
    pub const CONTACT_FIELDS: &[(&str, &str)] = &[
        ("first_name", FIRST_NAME),
        ("middle_name", MIDDLE_NAME),
        ("last_name", LAST_NAME),
        ("job_title", JOB_TITLE),
        ("company_name", COMPANY_NAME),
        ("work_phone", WORK_PHONE),
        ("home_phone", HOME_PHONE),
    ];

    /// Address field to column, in column order.
    pub const ADDRESS_FIELDS: &[(&str, &str)] = &[
        ("line1", ADDRESS1),
        ("line2", ADDRESS2),
        ("line3", ADDRESS3),
        ("city", CITY),
        ("state_code", STATE),
        ("state_province", STATE_PROVINCE),
        ("country", COUNTRY),
        ("postal_code", POSTAL_CODE),
        ("sub_postal_code", SUB_POSTAL_CODE),
    ];

    /// Prefix of custom field names (`custom_field_1` .. `custom_field_15`).
    pub const CUSTOM_FIELD_PREFIX: &str = "custom_field_";

    /// Column header for custom field number `n`.
    pub fn custom_field(n: &str) -> String {
        format!("CUSTOM FIELD {n}")
    }
}

/// Status filter values accepted by query endpoints.
pub mod status {
    pub const ACTIVE: &str = "ACTIVE";
    pub const UNCONFIRMED: &str = "UNCONFIRMED";
    pub const OPTOUT: &str = "OPTOUT";
    pub const REMOVED: &str = "REMOVED";
    pub const CONFIRMED: &str = "CONFIRMED";
    pub const DRAFT: &str = "DRAFT";
    pub const SCHEDULED: &str = "SCHEDULED";
    pub const SENT: &str = "SENT";
}

/// Value of `action_by` when a contact acts on their own behalf.
pub const ACTION_BY_VISITOR: &str = "ACTION_BY_VISITOR";
