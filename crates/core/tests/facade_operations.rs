//! Facade behaviour against a recording transport.

mod support;

use std::sync::Arc;

use ctct_core::{CompletionExt, ConstantContact, HttpMethod, RequestBody};
use ctct_domain::types::{AddContacts, AddContactsImportData, ExportContacts, TestSend};
use ctct_domain::{CtctError, QueryParams, Record};
use serde_json::{json, Value};
use support::transport::{API_KEY, TOKEN};
use support::RecordingTransport;

const BASE: &str = "https://api.constantcontact.com/v2/";

fn json_body(body: Option<&RequestBody>) -> Value {
    match body {
        Some(RequestBody::Json(text)) => serde_json::from_str(text).unwrap(),
        other => panic!("expected JSON body, got {other:?}"),
    }
}

#[tokio::test]
async fn id_and_record_produce_identical_requests() {
    let transport = RecordingTransport::new()
        .respond(200, r#"{"id":"42","first_name":"Ada"}"#)
        .respond(200, r#"{"id":"42","first_name":"Ada"}"#);
    let client = transport.client();

    client.get_contact(TOKEN, 42_u64).await.unwrap();
    client.get_contact(TOKEN, &Record::new().with("id", 42)).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
    assert_eq!(requests[0].url, format!("{BASE}contacts/42?api_key=test-key"));
    assert_eq!(requests[0].method, HttpMethod::Get);
}

#[tokio::test]
async fn base_url_without_trailing_slash_is_joined() {
    let transport = RecordingTransport::new().respond(200, "[]");
    let client = ConstantContact::with_base_url(API_KEY, "http://localhost:8080/v2", Arc::new(transport.clone()));

    client.get_lists(TOKEN, &QueryParams::new()).await.unwrap();

    assert_eq!(transport.last_request().url, "http://localhost:8080/v2/lists?api_key=test-key");
}

#[tokio::test]
async fn invalid_entity_fails_before_sending() {
    let transport = RecordingTransport::new();
    let client = transport.client();

    let err = client.delete_contact(TOKEN, "not-an-id").await.unwrap_err();
    assert!(matches!(err, CtctError::InvalidArgument(_)));

    let err = client.get_email_campaign(TOKEN, &Record::new().with("name", "x")).await.unwrap_err();
    assert!(matches!(err, CtctError::InvalidArgument(_)));

    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn contacts_page_carries_cursor() {
    let transport = RecordingTransport::new().respond(
        200,
        r#"{"results":[{"id":"1","status":"ACTIVE"},{"id":"2","status":"ACTIVE"}],
            "meta":{"pagination":{"next_link":"/v2/contacts?next=c3RhcnRBdD0y"}}}"#,
    );
    let client = transport.client();

    let page = client.get_contacts(TOKEN, &QueryParams::determine("?limit=2")).await.unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.cursor(), Some("c3RhcnRBdD0y"));
    assert_eq!(transport.last_request().url, format!("{BASE}contacts?api_key=test-key&limit=2"));
}

#[tokio::test]
async fn next_page_request_keeps_cursor_parameters() {
    let transport = RecordingTransport::new()
        .respond(200, r#"{"results":[],"meta":{"pagination":{"next_link":"/v2/contacts?next=ABC&limit=50"}}}"#)
        .respond(200, r#"{"results":[],"meta":{"pagination":{}}}"#);
    let client = transport.client();

    let first = client.get_contacts(TOKEN, &QueryParams::new()).await.unwrap();
    let next = first.next_params().unwrap();
    let last = client.get_contacts(TOKEN, &next).await.unwrap();

    assert!(!last.has_next());
    assert_eq!(transport.last_request().url, format!("{BASE}contacts?api_key=test-key&next=ABC&limit=50"));
}

#[tokio::test]
async fn contact_by_email_uses_email_filter() {
    let transport = RecordingTransport::new().respond(200, r#"{"results":[],"meta":{"pagination":{}}}"#);

    let page = transport.client().get_contact_by_email(TOKEN, "ada@example.com").await.unwrap();

    assert!(page.is_empty());
    assert!(!page.has_next());
    assert_eq!(
        transport.last_request().url,
        format!("{BASE}contacts?api_key=test-key&email=ada%40example.com")
    );
}

#[tokio::test]
async fn add_contact_by_visitor_sets_action_by() {
    let transport = RecordingTransport::new().respond(201, r#"{"id":"9"}"#);
    let mut contact = Record::new().with("first_name", "Ada");
    contact.push("email_addresses", Record::new().with("email_address", "ada@example.com"));
    contact.set("last_update_date", "2024-01-01");

    let created = transport.client().add_contact(TOKEN, &contact, true).await.unwrap();

    let request = transport.last_request();
    assert_eq!(created.id().as_deref(), Some("9"));
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, format!("{BASE}contacts?api_key=test-key&action_by=ACTION_BY_VISITOR"));
    assert_eq!(
        json_body(request.body.as_ref()),
        json!({ "first_name": "Ada", "email_addresses": [{ "email_address": "ada@example.com" }] })
    );
    assert!(contact.is_set("last_update_date"));
}

#[tokio::test]
async fn update_contact_requires_id() {
    let transport = RecordingTransport::new();
    let err = transport.client().update_contact(TOKEN, &Record::new(), false).await.unwrap_err();
    assert!(matches!(err, CtctError::InvalidArgument(_)));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn delete_succeeds_only_on_no_content() {
    let transport = RecordingTransport::new().respond(204, "").respond(200, "");
    let client = transport.client();

    client.delete_contact_from_list(TOKEN, 3_u64, "17").await.unwrap();
    let err = client.delete_email_campaign(TOKEN, 5_u64).await.unwrap_err();

    let requests = transport.requests();
    assert_eq!(requests[0].method, HttpMethod::Delete);
    assert_eq!(requests[0].url, format!("{BASE}contacts/3/lists/17?api_key=test-key"));
    assert!(requests[0].body.is_none());
    assert_eq!(err, CtctError::Api { status: 200, body: String::new() });
}

#[tokio::test]
async fn api_errors_keep_status_and_body() {
    let body = r#"[{"error_key":"http.status.not_found","error_message":"The requested resource was not found."}]"#;
    let transport = RecordingTransport::new().respond(404, body);

    let err = transport.client().get_list(TOKEN, 99_u64).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.api_details()[0].error_message, "The requested resource was not found.");
}

#[tokio::test]
async fn unexpected_success_shape_is_mapping_error() {
    let transport = RecordingTransport::new().respond(200, r#"{"id":"1"}"#);
    let err = transport.client().get_lists(TOKEN, &QueryParams::new()).await.unwrap_err();
    assert!(matches!(err, CtctError::Mapping(_)));
}

#[tokio::test]
async fn transport_failures_surface_unchanged() {
    let transport = RecordingTransport::new().fail("connection reset");
    let err = transport.client().get_lists(TOKEN, &QueryParams::new()).await.unwrap_err();
    assert_eq!(err, CtctError::Transport("connection reset".into()));
}

#[tokio::test]
async fn campaign_update_strips_server_managed_fields() {
    let transport = RecordingTransport::new().respond(200, r#"{"id":"100","name":"Renamed"}"#);
    let campaign = Record::new()
        .with("id", "100")
        .with("name", "Renamed")
        .with("created_date", "2024-01-01T00:00:00Z")
        .with("sent_to_contact_lists", vec![Record::new().with("id", "1").with("name", "General")]);

    transport.client().update_email_campaign(TOKEN, &campaign).await.unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Put);
    assert_eq!(request.url, format!("{BASE}emailmarketing/campaigns/100?api_key=test-key"));
    assert_eq!(
        json_body(request.body.as_ref()),
        json!({ "name": "Renamed", "sent_to_contact_lists": [{ "id": "1" }] })
    );
}

#[tokio::test]
async fn campaign_listing_maps_summaries() {
    let transport = RecordingTransport::new().respond(
        200,
        r#"{"results":[{"id":"1","name":"A","status":"DRAFT","modified_date":"2024","subject":"hidden"}],
            "meta":{"pagination":{}}}"#,
    );

    let page = transport.client().get_email_campaigns(TOKEN, &QueryParams::new().status("DRAFT")).await.unwrap();

    assert_eq!(page.items[0].get_str("status"), Some("DRAFT"));
    assert!(!page.items[0].is_set("subject"));
}

#[tokio::test]
async fn schedule_round_trip_uses_nested_paths() {
    let transport = RecordingTransport::new()
        .respond(201, r#"{"id":"1","scheduled_date":"2030-01-01T00:00:00.000Z"}"#)
        .respond(200, r#"[{"id":"1","scheduled_date":"2030-01-01T00:00:00.000Z"}]"#)
        .respond(200, r#"{"id":"1","scheduled_date":"2031-01-01T00:00:00.000Z"}"#)
        .respond(204, "");
    let client = transport.client();

    let schedule = Record::new().with("scheduled_date", "2030-01-01T00:00:00.000Z");
    let created = client.add_email_campaign_schedule(TOKEN, 100_u64, &schedule).await.unwrap();
    let all = client.get_email_campaign_schedules(TOKEN, 100_u64).await.unwrap();
    let moved = created.clone().with("scheduled_date", "2031-01-01T00:00:00.000Z");
    client.update_email_campaign_schedule(TOKEN, 100_u64, &moved).await.unwrap();
    client.delete_email_campaign_schedule(TOKEN, 100_u64, &created).await.unwrap();

    let requests = transport.requests();
    assert_eq!(all.len(), 1);
    assert_eq!(requests[0].url, format!("{BASE}emailmarketing/campaigns/100/schedules?api_key=test-key"));
    assert_eq!(requests[2].url, format!("{BASE}emailmarketing/campaigns/100/schedules/1?api_key=test-key"));
    assert_eq!(json_body(requests[2].body.as_ref()), json!({ "scheduled_date": "2031-01-01T00:00:00.000Z" }));
    assert_eq!(requests[3].method, HttpMethod::Delete);
}

#[tokio::test]
async fn test_send_posts_typed_body() {
    let transport =
        RecordingTransport::new().respond(200, r#"{"format":"HTML","email_addresses":["qa@example.com"]}"#);
    let send = TestSend::new("HTML", vec!["qa@example.com".into()]);

    let result = transport.client().send_email_campaign_test(TOKEN, "100", &send).await.unwrap();

    assert_eq!(result.get_str("format"), Some("HTML"));
    let request = transport.last_request();
    assert_eq!(request.url, format!("{BASE}emailmarketing/campaigns/100/tests?api_key=test-key"));
    assert_eq!(json_body(request.body.as_ref()), json!({ "format": "HTML", "email_addresses": ["qa@example.com"] }));
}

#[tokio::test]
async fn tracking_feeds_accept_both_page_shapes() {
    let transport = RecordingTransport::new()
        .respond(
            200,
            r#"{"results":[{"activity_type":"EMAIL_OPEN","contact_id":"1","open_date":"2024"}],
                "meta":{"pagination":{"next_link":"/v2/emailmarketing/campaigns/5/tracking/opens?next=abc"}}}"#,
        )
        .respond(
            200,
            r#"{"results":[{"activity_type":"EMAIL_SEND","send_date":"2024"}],
                "next":"/v2/contacts/7/tracking/sends?limit=1&next=def"}"#,
        );
    let client = transport.client();

    let opens = client.get_email_campaign_opens(TOKEN, 5_u64, &QueryParams::new()).await.unwrap();
    let sends = client.get_contact_sends(TOKEN, 7_u64, &QueryParams::new().limit(1)).await.unwrap();

    assert_eq!(opens.cursor(), Some("abc"));
    assert_eq!(sends.cursor(), Some("def"));
    let requests = transport.requests();
    assert_eq!(requests[0].url, format!("{BASE}emailmarketing/campaigns/5/tracking/opens?api_key=test-key"));
    assert_eq!(requests[1].url, format!("{BASE}contacts/7/tracking/sends?api_key=test-key&limit=1"));
}

#[tokio::test]
async fn summary_reports_hit_report_endpoints() {
    let transport = RecordingTransport::new()
        .respond(200, r#"{"sends":10,"opens":4,"clicks":0,"spam_count":0}"#)
        .respond(200, r#"{"sends":1,"opens":1}"#);
    let client = transport.client();

    let campaign = client.get_email_campaign_summary_report(TOKEN, 5_u64).await.unwrap();
    let contact = client.get_contact_summary_report(TOKEN, 7_u64).await.unwrap();

    assert_eq!(campaign.get_i64("clicks"), Some(0));
    assert!(contact.get("spam_count").is_unset());
    let requests = transport.requests();
    assert_eq!(
        requests[0].url,
        format!("{BASE}emailmarketing/campaigns/5/tracking/reports/summary?api_key=test-key")
    );
    assert_eq!(requests[1].url, format!("{BASE}contacts/7/tracking/reports/summary?api_key=test-key"));
}

#[tokio::test]
async fn verified_addresses_filter_by_status() {
    let transport = RecordingTransport::new()
        .respond(200, r#"[{"email_address":"owner@example.com","status":"CONFIRMED"}]"#)
        .respond(200, "[]");
    let client = transport.client();

    let confirmed = client.get_verified_email_addresses(TOKEN, Some("CONFIRMED")).await.unwrap();
    client.get_verified_email_addresses(TOKEN, None).await.unwrap();

    assert_eq!(confirmed[0].get_str("status"), Some("CONFIRMED"));
    let requests = transport.requests();
    assert_eq!(
        requests[0].url,
        format!("{BASE}account/verifiedemailaddresses?api_key=test-key&status=CONFIRMED")
    );
    assert_eq!(requests[1].url, format!("{BASE}account/verifiedemailaddresses?api_key=test-key"));
}

#[tokio::test]
async fn add_contacts_activity_posts_json_import() {
    let transport = RecordingTransport::new().respond(201, r#"{"id":"a07e1","type":"ADD_CONTACTS","status":"QUEUED"}"#);
    let mut row = AddContactsImportData::new("ada@example.com");
    row.first_name = Some("Ada".into());
    let import = AddContacts::new(vec![row], vec!["4".into()], None).unwrap();

    let activity = transport.client().add_create_contacts_activity(TOKEN, &import).await.unwrap();

    assert_eq!(activity.get_str("status"), Some("QUEUED"));
    let request = transport.last_request();
    assert_eq!(request.header("Content-Type"), Some("application/json"));
    let body = json_body(request.body.as_ref());
    assert_eq!(body["column_names"], json!(["EMAIL", "FIRST NAME"]));
    assert_eq!(body["lists"], json!(["4"]));
}

#[tokio::test]
async fn file_activity_sends_multipart_parts() {
    let transport = RecordingTransport::new().respond(201, r#"{"id":"a07e2","type":"ADD_CONTACTS"}"#);

    transport
        .client()
        .add_create_contacts_activity_from_file(TOKEN, "a.csv", b"x,y\n1,2", &["1".into(), "2".into()])
        .await
        .unwrap();

    let request = transport.last_request();
    assert_eq!(request.url, format!("{BASE}activities/addcontacts?api_key=test-key"));
    let content_type = request.header("Content-Type").unwrap().to_string();
    let boundary = content_type.strip_prefix("multipart/form-data; boundary=").unwrap();
    assert_eq!(request.header("Authorization"), Some("Bearer test-token"));
    assert_eq!(request.header("Accept"), Some("application/json"));

    let Some(RequestBody::Binary(bytes)) = request.body else { panic!("expected binary body") };
    let body = String::from_utf8(bytes).unwrap();
    assert_eq!(body.matches(&format!("--{boundary}\r\n")).count(), 3);
    assert!(body.ends_with(&format!("--{boundary}--\r\n")));
    assert!(body.contains("name=\"lists\"\r\n\r\n1,2\r\n"));
    assert!(body.contains("name=\"data\"\r\n\r\nx,y\n1,2\r\n"));
}

#[tokio::test]
async fn list_maintenance_activities_build_expected_bodies() {
    let transport = RecordingTransport::new()
        .respond(201, r#"{"id":"c1","type":"CLEAR_CONTACTS_FROM_LISTS"}"#)
        .respond(201, r#"{"id":"r1","type":"REMOVE_CONTACTS_FROM_LISTS"}"#)
        .respond(201, r#"{"id":"e1","type":"EXPORT_CONTACTS"}"#);
    let client = transport.client();
    let lists = vec!["4".to_string()];

    client.add_clear_lists_activity(TOKEN, &lists).await.unwrap();
    client.add_remove_contacts_from_lists_activity(TOKEN, &["a@x.com".into()], &lists).await.unwrap();
    client.add_export_contacts_activity(TOKEN, &ExportContacts::new(lists.clone())).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].url, format!("{BASE}activities/clearlists?api_key=test-key"));
    assert_eq!(json_body(requests[0].body.as_ref()), json!({ "lists": ["4"] }));
    assert_eq!(
        json_body(requests[1].body.as_ref()),
        json!({ "import_data": [{ "email_addresses": ["a@x.com"] }], "lists": ["4"] })
    );
    assert_eq!(json_body(requests[2].body.as_ref())["file_type"], "CSV");
}

#[tokio::test]
async fn activity_lookup_maps_errors_collection() {
    let transport = RecordingTransport::new().respond(
        200,
        r#"{"id":"a07e1","status":"COMPLETE","error_count":1,
            "errors":[{"message":"bad email","line_number":2,"email_address":"x@"}]}"#,
    );

    let activity = transport.client().get_activity(TOKEN, "a07e1").await.unwrap();

    assert_eq!(activity.get_records("errors")[0].get_i64("line_number"), Some(2));
    assert_eq!(transport.last_request().url, format!("{BASE}activities/a07e1?api_key=test-key"));
}

#[tokio::test]
async fn callback_receives_outcome_and_caller_too() {
    let transport = RecordingTransport::new().respond(500, "boom");
    let client = transport.client();
    let mut seen = None;

    let outcome = client
        .get_lists(TOKEN, &QueryParams::new())
        .with_callback(|result| seen = Some(result.as_ref().map_err(CtctError::status).err()))
        .await;

    assert_eq!(outcome.unwrap_err().status(), Some(500));
    assert_eq!(seen, Some(Some(Some(500))));
}
