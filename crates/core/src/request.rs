//! Request construction
//!
//! Builds fully qualified URLs and the descriptor handed to the transport.

use std::fmt;

use ctct_domain::{CtctError, QueryParams, Result};

use crate::multipart::Multipart;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const ACCEPT: &str = "Accept";
pub const AUTHORIZATION: &str = "Authorization";
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP verbs used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// Serialized JSON document.
    Json(String),
    /// Pre-encoded bytes (multipart uploads).
    Binary(Vec<u8>),
}

impl RequestBody {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Json(text) => text.as_bytes(),
            Self::Binary(bytes) => bytes,
        }
    }
}

/// Everything the transport needs to send one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl RequestDescriptor {
    /// JSON request carrying the standard header set.
    pub fn json(method: HttpMethod, url: String, access_token: &str, body: Option<String>) -> Self {
        Self { method, url, headers: headers(access_token), body: body.map(RequestBody::Json) }
    }

    /// Multipart POST; the JSON content type is replaced by the multipart one.
    pub fn multipart(url: String, access_token: &str, multipart: Multipart) -> Self {
        let mut descriptor = Self::json(HttpMethod::Post, url, access_token, None);
        descriptor.set_header(CONTENT_TYPE, multipart.content_type());
        descriptor.body = Some(RequestBody::Binary(multipart.body));
        descriptor
    }

    /// Header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }

    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
            Some(slot) => slot.1 = value,
            None => self.headers.push((name.to_string(), value)),
        }
    }

    /// URL without its query string, safe to log.
    pub fn redacted_url(&self) -> &str {
        redact_url(&self.url)
    }
}

/// Build an absolute request URL.
///
/// `%s` / `%d` placeholders in `template` are replaced in order by
/// `path_args`, each percent-encoded as a single path segment. The query
/// string always starts with the service's own `api_key`; an `api_key` in
/// `query` is ignored. Every key and value is percent-encoded.
///
/// # Errors
///
/// Returns [`CtctError::InvalidArgument`] when the number of placeholders
/// and path arguments differ.
pub fn build_url(
    base_url: &str,
    template: &str,
    path_args: &[&str],
    query: &QueryParams,
    api_key: &str,
) -> Result<String> {
    let path = fill_template(template, path_args)?;

    let mut url = String::with_capacity(base_url.len() + path.len() + 64);
    url.push_str(base_url);
    url.push_str(&path);
    url.push_str("?api_key=");
    url.push_str(&urlencoding::encode(api_key));

    for (key, value) in query.iter().filter(|(key, _)| *key != "api_key") {
        url.push('&');
        url.push_str(&urlencoding::encode(key));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }

    Ok(url)
}

fn fill_template(template: &str, args: &[&str]) -> Result<String> {
    let placeholders = template.matches("%s").count() + template.matches("%d").count();
    if placeholders != args.len() {
        return Err(CtctError::InvalidArgument(format!(
            "path template '{template}' expects {placeholders} argument(s), got {}",
            args.len()
        )));
    }

    let mut path = String::with_capacity(template.len() + 16);
    let mut args = args.iter();
    let mut rest = template;
    while let Some(at) = rest.find('%') {
        let (head, tail) = rest.split_at(at);
        path.push_str(head);
        if tail.starts_with("%s") || tail.starts_with("%d") {
            if let Some(arg) = args.next() {
                path.push_str(&urlencoding::encode(arg));
            }
            rest = &tail[2..];
        } else {
            path.push('%');
            rest = &tail[1..];
        }
    }
    path.push_str(rest);
    Ok(path)
}

/// The standard header set: JSON in, JSON out, bearer token.
pub fn headers(access_token: &str) -> Vec<(String, String)> {
    vec![
        (CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()),
        (ACCEPT.to_string(), APPLICATION_JSON.to_string()),
        (AUTHORIZATION.to_string(), format!("Bearer {access_token}")),
    ]
}

/// Strip the query string (and with it the api key) from a URL.
pub fn redact_url(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}
