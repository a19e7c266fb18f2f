//! Response classification
//!
//! Turns a [`RawResponse`] into the shape an operation promises, or into
//! the matching [`CtctError`].

use ctct_domain::{CtctError, FieldSpec, PaginatedResult, Record, Result};
use serde_json::Value;

use crate::mapper::{from_wire, from_wire_list};
use crate::pagination::{parse_page, parse_tracking_activity};
use crate::ports::RawResponse;

/// Success body parsed as JSON.
///
/// # Errors
///
/// [`CtctError::Api`] for a non-2xx status; [`CtctError::Mapping`] when the
/// body is not JSON.
pub fn json_body(response: &RawResponse) -> Result<Value> {
    ensure_success(response)?;
    serde_json::from_str(&response.body)
        .map_err(|e| CtctError::Mapping(format!("response body is not valid JSON: {e}")))
}

/// Single-object response.
///
/// # Errors
///
/// See [`json_body`] and [`from_wire`].
pub fn record(response: &RawResponse, spec: &FieldSpec) -> Result<Record> {
    from_wire(&json_body(response)?, spec)
}

/// Top-level array response.
///
/// # Errors
///
/// See [`json_body`] and [`from_wire_list`].
pub fn records(response: &RawResponse, spec: &FieldSpec) -> Result<Vec<Record>> {
    from_wire_list(&json_body(response)?, spec)
}

/// Envelope page response.
///
/// # Errors
///
/// See [`json_body`] and [`parse_page`].
pub fn page(response: &RawResponse, spec: &FieldSpec) -> Result<PaginatedResult> {
    parse_page(&json_body(response)?, spec)
}

/// Tracking page response in either page shape.
///
/// # Errors
///
/// See [`json_body`] and [`parse_tracking_activity`].
pub fn tracking_page(response: &RawResponse, spec: &FieldSpec) -> Result<PaginatedResult> {
    parse_tracking_activity(&json_body(response)?, spec)
}

/// Delete response; only `204 No Content` counts as success.
///
/// # Errors
///
/// [`CtctError::Api`] for any other status.
pub fn deleted(response: &RawResponse) -> Result<()> {
    if response.status == 204 {
        Ok(())
    } else {
        Err(api_error(response))
    }
}

fn ensure_success(response: &RawResponse) -> Result<()> {
    if response.is_success() {
        Ok(())
    } else {
        Err(api_error(response))
    }
}

fn api_error(response: &RawResponse) -> CtctError {
    CtctError::Api { status: response.status, body: response.body.clone() }
}
