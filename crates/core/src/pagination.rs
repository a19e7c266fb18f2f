//! Collection responses and cursor extraction
//!
//! Two page shapes exist. Most collections use the envelope
//! `{results, meta: {pagination: {next_link}}}`; some tracking responses
//! use the flat `{results, next}` form. They are parsed separately and
//! [`parse_tracking_activity`] picks the path from the payload itself.

use ctct_domain::{CtctError, FieldSpec, PaginatedResult, Result};
use serde_json::Value;

use crate::mapper::from_wire_list;

const NEXT_MARKER: &str = "&next=";

/// Parse an envelope page.
///
/// The cursor is everything after the `?next=` that opens the query of
/// `meta.pagination.next_link`.
///
/// # Errors
///
/// - [`CtctError::Mapping`] when `results` or `meta` is missing, or an item
///   fails to map.
/// - [`CtctError::Protocol`] when `next_link` is present but has no `?`, or
///   its query does not start with a non-empty `next=` value.
pub fn parse_page(payload: &Value, spec: &FieldSpec) -> Result<PaginatedResult> {
    let items = results(payload, spec)?;
    let meta = payload
        .get("meta")
        .ok_or_else(|| CtctError::Mapping(format!("{} page is missing 'meta'", spec.name)))?;

    let cursor = match meta.get("pagination").and_then(|p| p.get("next_link")) {
        None | Some(Value::Null) => None,
        Some(Value::String(link)) => Some(envelope_cursor(link)?),
        Some(other) => return Err(CtctError::Protocol(format!("next_link is not a string: {other}"))),
    };

    Ok(PaginatedResult::new(items, cursor))
}

/// Parse a flat tracking page; the cursor follows the `&next=` marker of
/// the `next` field.
///
/// # Errors
///
/// - [`CtctError::Mapping`] when `results` is missing or an item fails to
///   map.
/// - [`CtctError::Protocol`] when `next` is present without the marker.
pub fn parse_tracking_page(payload: &Value, spec: &FieldSpec) -> Result<PaginatedResult> {
    let items = results(payload, spec)?;

    let cursor = match payload.get("next") {
        None | Some(Value::Null) => None,
        Some(Value::String(next)) => Some(flat_cursor(next)?),
        Some(other) => return Err(CtctError::Protocol(format!("next is not a string: {other}"))),
    };

    Ok(PaginatedResult::new(items, cursor))
}

/// Parse a tracking endpoint response in whichever shape it arrived.
///
/// # Errors
///
/// See [`parse_page`] and [`parse_tracking_page`].
pub fn parse_tracking_activity(payload: &Value, spec: &FieldSpec) -> Result<PaginatedResult> {
    if payload.get("meta").is_some() {
        parse_page(payload, spec)
    } else {
        parse_tracking_page(payload, spec)
    }
}

fn results(payload: &Value, spec: &FieldSpec) -> Result<Vec<ctct_domain::Record>> {
    if !payload.is_object() {
        return Err(CtctError::Mapping(format!("{} page is not an object", spec.name)));
    }
    let results = payload
        .get("results")
        .ok_or_else(|| CtctError::Mapping(format!("{} page is missing 'results'", spec.name)))?;
    from_wire_list(results, spec)
}

fn envelope_cursor(link: &str) -> Result<String> {
    let (_, query) = link
        .split_once('?')
        .ok_or_else(|| CtctError::Protocol(format!("next_link has no query string: {link}")))?;
    query
        .strip_prefix("next=")
        .filter(|cursor| !cursor.is_empty())
        .map(str::to_string)
        .ok_or_else(|| CtctError::Protocol(format!("next_link query does not start with a cursor: {link}")))
}

fn flat_cursor(next: &str) -> Result<String> {
    next.split_once(NEXT_MARKER)
        .map(|(_, cursor)| cursor.to_string())
        .ok_or_else(|| CtctError::Protocol(format!("next has no '{NEXT_MARKER}' marker: {next}")))
}

#[cfg(test)]
mod tests {
    use ctct_domain::resources::{CONTACT, OPEN_ACTIVITY};
    use serde_json::json;

    use super::*;

    #[test]
    fn envelope_cursor_follows_question_mark() {
        let payload = json!({
            "results": [{ "id": "1" }],
            "meta": { "pagination": { "next_link": "/v2/contacts?next=c3RhcnRBdD0z" } },
        });
        let page = parse_page(&payload, &CONTACT).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.cursor(), Some("c3RhcnRBdD0z"));
    }

    #[test]
    fn envelope_without_next_link_is_last_page() {
        let payload = json!({ "results": [], "meta": { "pagination": {} } });
        let page = parse_page(&payload, &CONTACT).unwrap();
        assert!(page.cursor.is_none());
        assert!(page.is_empty());
    }

    #[test]
    fn next_link_without_query_is_protocol_error() {
        let payload = json!({ "results": [], "meta": { "pagination": { "next_link": "/v2/contacts" } } });
        assert!(matches!(parse_page(&payload, &CONTACT), Err(CtctError::Protocol(_))));

        let short = json!({ "results": [], "meta": { "pagination": { "next_link": "/x?ne" } } });
        assert!(matches!(parse_page(&short, &CONTACT), Err(CtctError::Protocol(_))));
    }

    #[test]
    fn next_link_must_lead_with_next() {
        let payload = json!({ "results": [], "meta": { "pagination": { "next_link": "/v2/contacts?limit=5&next=x" } } });
        assert!(matches!(parse_page(&payload, &CONTACT), Err(CtctError::Protocol(_))));

        let empty = json!({ "results": [], "meta": { "pagination": { "next_link": "/v2/contacts?next=" } } });
        assert!(matches!(parse_page(&empty, &CONTACT), Err(CtctError::Protocol(_))));
    }

    #[test]
    fn envelope_cursor_keeps_trailing_parameters() {
        let payload = json!({
            "results": [],
            "meta": { "pagination": { "next_link": "/v2/contacts?next=ABC&limit=50" } },
        });
        let page = parse_page(&payload, &CONTACT).unwrap();
        assert_eq!(page.cursor(), Some("ABC&limit=50"));
    }

    #[test]
    fn missing_results_or_meta_is_mapping_error() {
        assert!(matches!(parse_page(&json!({ "meta": {} }), &CONTACT), Err(CtctError::Mapping(_))));
        assert!(matches!(parse_page(&json!({ "results": [] }), &CONTACT), Err(CtctError::Mapping(_))));
        assert!(matches!(parse_page(&json!([]), &CONTACT), Err(CtctError::Mapping(_))));
    }

    #[test]
    fn flat_cursor_follows_marker() {
        let payload = json!({
            "results": [{ "activity_type": "EMAIL_OPEN", "open_date": "2024-02-01" }],
            "next": "/v2/emailmarketing/campaigns/1/tracking/opens?limit=1&next=bGltaXQ9MQ",
        });
        let page = parse_tracking_page(&payload, &OPEN_ACTIVITY).unwrap();
        assert_eq!(page.cursor(), Some("bGltaXQ9MQ"));
        assert_eq!(page.items[0].get_str("open_date"), Some("2024-02-01"));
    }

    #[test]
    fn flat_next_without_marker_is_protocol_error() {
        let payload = json!({ "results": [], "next": "/v2/opens?next=abc" });
        assert!(matches!(parse_tracking_page(&payload, &OPEN_ACTIVITY), Err(CtctError::Protocol(_))));
    }

    #[test]
    fn tracking_activity_selects_shape_by_meta() {
        let envelope = json!({
            "results": [],
            "meta": { "pagination": { "next_link": "/v2/opens?next=env" } },
        });
        let flat = json!({ "results": [], "next": "/v2/opens?limit=5&next=flat" });

        assert_eq!(parse_tracking_activity(&envelope, &OPEN_ACTIVITY).unwrap().cursor(), Some("env"));
        assert_eq!(parse_tracking_activity(&flat, &OPEN_ACTIVITY).unwrap().cursor(), Some("flat"));
    }
}
