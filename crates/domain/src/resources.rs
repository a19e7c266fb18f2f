//! Field specs for every resource the API exposes

use crate::fields::{Field, FieldSpec};

use Field::{Collection, Nested, Scalar};

// Contacts

pub static EMAIL_ADDRESS: FieldSpec = FieldSpec {
    name: "EmailAddress",
    fields: &[
        Scalar("id"),
        Scalar("status"),
        Scalar("confirm_status"),
        Scalar("opt_in_source"),
        Scalar("opt_in_date"),
        Scalar("opt_out_date"),
        Scalar("email_address"),
    ],
    server_managed: &[],
};

pub static ADDRESS: FieldSpec = FieldSpec {
    name: "Address",
    fields: &[
        Scalar("id"),
        Scalar("line1"),
        Scalar("line2"),
        Scalar("line3"),
        Scalar("city"),
        Scalar("address_type"),
        Scalar("state_code"),
        Scalar("country_code"),
        Scalar("postal_code"),
        Scalar("sub_postal_code"),
    ],
    server_managed: &[],
};

pub static NOTE: FieldSpec = FieldSpec {
    name: "Note",
    fields: &[Scalar("id"), Scalar("note"), Scalar("created_date")],
    server_managed: &[],
};

pub static CUSTOM_FIELD: FieldSpec = FieldSpec {
    name: "CustomField",
    fields: &[Scalar("name"), Scalar("value")],
    server_managed: &[],
};

pub static CONTACT_LIST: FieldSpec = FieldSpec {
    name: "ContactList",
    fields: &[Scalar("id"), Scalar("name"), Scalar("status"), Scalar("contact_count")],
    server_managed: &[],
};

pub static CONTACT: FieldSpec = FieldSpec {
    name: "Contact",
    fields: &[
        Scalar("id"),
        Scalar("status"),
        Scalar("first_name"),
        Scalar("middle_name"),
        Scalar("last_name"),
        Scalar("confirmed"),
        Scalar("source"),
        Scalar("prefix_name"),
        Scalar("job_title"),
        Scalar("company_name"),
        Scalar("home_phone"),
        Scalar("work_phone"),
        Scalar("cell_phone"),
        Scalar("fax"),
        Scalar("source_details"),
        Collection("email_addresses", &EMAIL_ADDRESS),
        Collection("addresses", &ADDRESS),
        Collection("notes", &NOTE),
        Collection("custom_fields", &CUSTOM_FIELD),
        Collection("lists", &CONTACT_LIST),
    ],
    server_managed: &["last_update_date"],
};

// Email marketing

pub static MESSAGE_FOOTER: FieldSpec = FieldSpec {
    name: "MessageFooter",
    fields: &[
        Scalar("city"),
        Scalar("state"),
        Scalar("country"),
        Scalar("organization_name"),
        Scalar("address_line_1"),
        Scalar("address_line_2"),
        Scalar("address_line_3"),
        Scalar("international_state"),
        Scalar("postal_code"),
        Scalar("include_forward_email"),
        Scalar("forward_email_link_text"),
        Scalar("include_subscribe_link"),
        Scalar("subscribe_link_text"),
    ],
    server_managed: &[],
};

pub static CLICK_THROUGH_DETAILS: FieldSpec = FieldSpec {
    name: "ClickThroughDetails",
    fields: &[Scalar("url"), Scalar("url_uid"), Scalar("click_count")],
    server_managed: &[],
};

/// Campaign summaries carry `spam_count`; contact summaries do not.
pub static TRACKING_SUMMARY: FieldSpec = FieldSpec {
    name: "TrackingSummary",
    fields: &[
        Scalar("sends"),
        Scalar("opens"),
        Scalar("clicks"),
        Scalar("forwards"),
        Scalar("unsubscribes"),
        Scalar("bounces"),
        Scalar("spam_count"),
    ],
    server_managed: &[],
};

/// List reference inside a campaign; only the id may be sent back.
pub static SENT_TO_CONTACT_LIST: FieldSpec = FieldSpec {
    name: "ContactList",
    fields: &[Scalar("id"), Scalar("name"), Scalar("status"), Scalar("contact_count")],
    server_managed: &["name", "status", "contact_count"],
};

pub static CAMPAIGN: FieldSpec = FieldSpec {
    name: "EmailCampaign",
    fields: &[
        Scalar("id"),
        Scalar("name"),
        Scalar("subject"),
        Scalar("from_name"),
        Scalar("from_email"),
        Scalar("reply_to_email"),
        Scalar("template_type"),
        Scalar("created_date"),
        Scalar("modified_date"),
        Scalar("last_run_date"),
        Scalar("next_run_date"),
        Scalar("status"),
        Scalar("is_permission_reminder_enabled"),
        Scalar("permission_reminder_text"),
        Scalar("is_view_as_webpage_enabled"),
        Scalar("view_as_web_page_text"),
        Scalar("view_as_web_page_link_text"),
        Scalar("greeting_salutations"),
        Scalar("greeting_name"),
        Scalar("greeting_string"),
        Scalar("email_content"),
        Scalar("email_content_format"),
        Scalar("style_sheet"),
        Scalar("text_content"),
        Scalar("permalink_url"),
        Nested("message_footer", &MESSAGE_FOOTER),
        Nested("tracking_summary", &TRACKING_SUMMARY),
        Collection("sent_to_contact_lists", &SENT_TO_CONTACT_LIST),
        Collection("click_through_details", &CLICK_THROUGH_DETAILS),
    ],
    server_managed: &[
        "id",
        "created_date",
        "last_run_date",
        "next_run_date",
        "tracking_summary",
        "click_through_details",
    ],
};

/// Shape of campaign entries in the collection listing.
pub static CAMPAIGN_SUMMARY: FieldSpec = FieldSpec {
    name: "EmailCampaign",
    fields: &[Scalar("id"), Scalar("name"), Scalar("status"), Scalar("modified_date")],
    server_managed: &[],
};

pub static SCHEDULE: FieldSpec = FieldSpec {
    name: "Schedule",
    fields: &[Scalar("id"), Scalar("scheduled_date")],
    server_managed: &["id"],
};

pub static TEST_SEND: FieldSpec = FieldSpec {
    name: "TestSend",
    fields: &[Scalar("format"), Scalar("personal_message"), Scalar("email_addresses")],
    server_managed: &[],
};

// Activities

pub static ACTIVITY_ERROR: FieldSpec = FieldSpec {
    name: "ActivityError",
    fields: &[Scalar("message"), Scalar("line_number"), Scalar("email_address")],
    server_managed: &[],
};

pub static ACTIVITY: FieldSpec = FieldSpec {
    name: "Activity",
    fields: &[
        Scalar("id"),
        Scalar("type"),
        Scalar("status"),
        Scalar("start_date"),
        Scalar("finish_date"),
        Scalar("created_date"),
        Scalar("error_count"),
        Scalar("contact_count"),
        Scalar("file_name"),
        Collection("errors", &ACTIVITY_ERROR),
        Collection("warnings", &ACTIVITY_ERROR),
    ],
    server_managed: &[],
};

// Tracking

pub static BOUNCE_ACTIVITY: FieldSpec = FieldSpec {
    name: "BounceActivity",
    fields: &[
        Scalar("activity_type"),
        Scalar("campaign_id"),
        Scalar("contact_id"),
        Scalar("email_address"),
        Scalar("bounce_code"),
        Scalar("bounce_description"),
        Scalar("bounce_message"),
        Scalar("bounce_date"),
    ],
    server_managed: &[],
};

pub static CLICK_ACTIVITY: FieldSpec = FieldSpec {
    name: "ClickActivity",
    fields: &[
        Scalar("activity_type"),
        Scalar("campaign_id"),
        Scalar("contact_id"),
        Scalar("email_address"),
        Scalar("link_id"),
        Scalar("click_date"),
    ],
    server_managed: &[],
};

pub static FORWARD_ACTIVITY: FieldSpec = FieldSpec {
    name: "ForwardActivity",
    fields: &[
        Scalar("activity_type"),
        Scalar("campaign_id"),
        Scalar("contact_id"),
        Scalar("email_address"),
        Scalar("forward_date"),
    ],
    server_managed: &[],
};

pub static OPEN_ACTIVITY: FieldSpec = FieldSpec {
    name: "OpenActivity",
    fields: &[
        Scalar("activity_type"),
        Scalar("campaign_id"),
        Scalar("contact_id"),
        Scalar("email_address"),
        Scalar("open_date"),
    ],
    server_managed: &[],
};

pub static SEND_ACTIVITY: FieldSpec = FieldSpec {
    name: "SendActivity",
    fields: &[
        Scalar("activity_type"),
        Scalar("campaign_id"),
        Scalar("contact_id"),
        Scalar("email_address"),
        Scalar("send_date"),
    ],
    server_managed: &[],
};

pub static UNSUBSCRIBE_ACTIVITY: FieldSpec = FieldSpec {
    name: "UnsubscribeActivity",
    fields: &[
        Scalar("activity_type"),
        Scalar("campaign_id"),
        Scalar("contact_id"),
        Scalar("email_address"),
        Scalar("unsubscribe_date"),
        Scalar("unsubscribe_source"),
        Scalar("unsubscribe_reason"),
    ],
    server_managed: &[],
};

// Account

pub static VERIFIED_EMAIL_ADDRESS: FieldSpec = FieldSpec {
    name: "VerifiedEmailAddress",
    fields: &[Scalar("email_address"), Scalar("status")],
    server_managed: &[],
};
