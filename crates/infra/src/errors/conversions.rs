//! Conversions from external infrastructure errors into SDK errors.

use ctct_domain::CtctError;
use reqwest::Error as HttpError;
use thiserror::Error;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the SDK error.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct InfraError(pub CtctError);

impl From<InfraError> for CtctError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<CtctError> for InfraError {
    fn from(value: CtctError) -> Self {
        Self(value)
    }
}

trait IntoCtctError {
    fn into_ctct(self) -> CtctError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → CtctError */
/* -------------------------------------------------------------------------- */

impl IntoCtctError for HttpError {
    fn into_ctct(self) -> CtctError {
        if self.is_timeout() {
            return CtctError::Transport("HTTP request timed out".into());
        }

        if self.is_connect() {
            return CtctError::Transport(format!("HTTP connection failure: {}", strip_query(&self)));
        }

        if self.is_builder() {
            return CtctError::InvalidArgument(format!("invalid HTTP request: {}", strip_query(&self)));
        }

        if self.is_decode() || self.is_body() {
            return CtctError::Transport(format!("failed to read HTTP response body: {}", strip_query(&self)));
        }

        CtctError::Transport(strip_query(&self))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_ctct())
    }
}

/* -------------------------------------------------------------------------- */
/* config parsing → CtctError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        Self(CtctError::Config(format!("Invalid JSON format: {value}")))
    }
}

impl From<toml::de::Error> for InfraError {
    fn from(value: toml::de::Error) -> Self {
        Self(CtctError::Config(format!("Invalid TOML format: {value}")))
    }
}

/// reqwest prints the request URL, api key included; drop the query.
fn strip_query(err: &HttpError) -> String {
    let mut err = err.to_string();
    if let Some(start) = err.find("?api_key=") {
        let end = err[start..].find([')', ' ']).map_or(err.len(), |offset| start + offset);
        err.replace_range(start..end, "");
    }
    err
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
