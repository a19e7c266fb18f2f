//! OAuth 2.0 helper for the Constant Contact authorization server
//!
//! Covers the two flows the API supports:
//! - Server flow: redirect with `response_type=code`, then exchange the code
//!   with [`CtctOAuth2::access_token`]
//! - Client (implicit) flow: redirect with `response_type=token`; the token
//!   arrives in the redirect fragment and never touches this helper
//!
//! [`CtctOAuth2::token_info`] introspects an existing token.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use ctct_domain::constants::oauth;
use ctct_domain::{CtctError, OAuthSettings, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info, instrument};

use crate::errors::InfraError;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Access token issued by the authorization server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,

    /// Token type (`Bearer`)
    #[serde(default = "default_token_type")]
    pub token_type: String,

    /// Access token lifetime in seconds
    #[serde(default, deserialize_with = "int_or_string")]
    pub expires_in: i64,

    /// Absolute expiration timestamp (UTC), computed when the token is
    /// received
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenSet {
    /// Stamp `expires_at` relative to `now`.
    #[must_use]
    pub fn issued_at(mut self, now: DateTime<Utc>) -> Self {
        self.expires_at = TimeDelta::try_seconds(self.expires_in).and_then(|lifetime| now.checked_add_signed(lifetime));
        self
    }

    /// Whether the token has expired at `now`. Tokens without an expiry
    /// never expire.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Result of token introspection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    pub client_id: String,
    /// Account the token was issued for
    pub user_name: String,
    /// Remaining lifetime in seconds
    #[serde(deserialize_with = "int_or_string")]
    pub expires_in: i64,
}

/// Body of a non-2xx authorization server response.
#[derive(Debug, Deserialize)]
struct OAuthErrorBody {
    error: Option<String>,
    error_description: Option<String>,
}

/// OAuth 2.0 client for one registered application.
#[derive(Debug, Clone)]
pub struct CtctOAuth2 {
    settings: OAuthSettings,
    base_url: String,
    client: Client,
}

impl CtctOAuth2 {
    /// Helper against the production authorization server.
    ///
    /// # Errors
    ///
    /// Returns [`CtctError::Transport`] if the HTTP client cannot be built.
    pub fn new(settings: OAuthSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(ctct_domain::constants::DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|err| CtctError::from(InfraError::from(err)))?;
        Ok(Self { settings, base_url: oauth::BASE_URL.to_string(), client })
    }

    /// Point at another authorization server root (must end with `/`).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn settings(&self) -> &OAuthSettings {
        &self.settings
    }

    /// URL to send the account owner to.
    ///
    /// `server_flow` selects `response_type=code`; otherwise the implicit
    /// flow's `response_type=token` is used. An empty `state` is omitted.
    pub fn authorization_url(&self, server_flow: bool, state: Option<&str>) -> String {
        let response_type = if server_flow { oauth::RESPONSE_TYPE_CODE } else { oauth::RESPONSE_TYPE_TOKEN };

        let mut params = vec![
            ("response_type", response_type),
            ("client_id", self.settings.client_id.as_str()),
            ("redirect_uri", self.settings.redirect_uri.as_str()),
        ];
        if let Some(state) = state.filter(|state| !state.is_empty()) {
            params.push(("state", state));
        }

        format!("{}{}?{}", self.base_url, oauth::AUTHORIZATION_ENDPOINT, encode_pairs(&params))
    }

    /// Exchange an authorization code for an access token.
    ///
    /// # Errors
    ///
    /// - [`CtctError::Transport`] if the server could not be reached
    /// - [`CtctError::OAuth`] if the server rejected the exchange
    /// - [`CtctError::Mapping`] if the token response could not be parsed
    #[instrument(skip(self, code), fields(client_id = %self.settings.client_id))]
    pub async fn access_token(&self, code: &str) -> Result<TokenSet> {
        let params = [
            ("grant_type", oauth::AUTHORIZATION_CODE_GRANT_TYPE),
            ("client_id", self.settings.client_id.as_str()),
            ("client_secret", self.settings.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", self.settings.redirect_uri.as_str()),
        ];
        let url = format!("{}{}?{}", self.base_url, oauth::TOKEN_ENDPOINT, encode_pairs(&params));

        debug!(endpoint = oauth::TOKEN_ENDPOINT, "exchanging authorization code");
        let response = self.client.post(url).send().await.map_err(|err| CtctError::from(InfraError::from(err)))?;
        let body = read_success(response).await?;

        let token: TokenSet = serde_json::from_str(&body)
            .map_err(|err| CtctError::Mapping(format!("invalid token response: {err}")))?;
        info!(expires_in = token.expires_in, "access token obtained");
        Ok(token.issued_at(Utc::now()))
    }

    /// Introspect an access token.
    ///
    /// # Errors
    ///
    /// Same as [`CtctOAuth2::access_token`].
    #[instrument(skip(self, access_token))]
    pub async fn token_info(&self, access_token: &str) -> Result<TokenInfo> {
        let url = format!("{}{}", self.base_url, oauth::TOKEN_INFO_ENDPOINT);
        let form = encode_pairs(&[("access_token", access_token)]);

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_URLENCODED)
            .body(form)
            .send()
            .await
            .map_err(|err| CtctError::from(InfraError::from(err)))?;
        let body = read_success(response).await?;

        serde_json::from_str(&body).map_err(|err| CtctError::Mapping(format!("invalid token info response: {err}")))
    }
}

async fn read_success(response: Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await.map_err(|err| CtctError::from(InfraError::from(err)))?;
    if status.is_success() {
        return Ok(body);
    }

    debug!(%status, "authorization server rejected request");
    let message = match serde_json::from_str::<OAuthErrorBody>(&body) {
        Ok(OAuthErrorBody { error_description: Some(description), .. }) => description,
        Ok(OAuthErrorBody { error: Some(error), .. }) => error,
        _ if body.trim().is_empty() => format!("HTTP {status}"),
        _ => body,
    };
    Err(CtctError::OAuth(message))
}

fn encode_pairs(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// The authorization server reports some integers as strings.
fn int_or_string<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Int(value) => Ok(value),
        Raw::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> CtctOAuth2 {
        CtctOAuth2::new(OAuthSettings {
            client_id: "app key".into(),
            client_secret: "secret".into(),
            redirect_uri: "https://example.com/cb?x=1".into(),
        })
        .expect("oauth helper")
    }

    #[test]
    fn server_flow_url_requests_code() {
        let url = helper().authorization_url(true, Some("xyz"));
        assert_eq!(
            url,
            "https://oauth2.constantcontact.com/oauth2/oauth/siteowner/authorize?response_type=code\
             &client_id=app%20key&redirect_uri=https%3A%2F%2Fexample.com%2Fcb%3Fx%3D1&state=xyz"
        );
    }

    #[test]
    fn client_flow_url_requests_token_without_state() {
        let url = helper().authorization_url(false, None);
        assert!(url.contains("response_type=token"));
        assert!(!url.contains("state="));
        assert_eq!(helper().authorization_url(false, Some("")), url);
    }

    #[test]
    fn expiry_is_computed_from_lifetime() {
        let now = Utc::now();
        let token = TokenSet {
            access_token: "t".into(),
            token_type: "Bearer".into(),
            expires_in: 60,
            expires_at: None,
        }
        .issued_at(now);

        assert_eq!(token.expires_at, Some(now + TimeDelta::seconds(60)));
        assert!(!token.is_expired_at(now));
        assert!(token.is_expired_at(now + TimeDelta::seconds(61)));
    }

    #[test]
    fn token_info_accepts_string_lifetime() {
        let info: TokenInfo =
            serde_json::from_str(r#"{"client_id":"c","user_name":"owner","expires_in":"315359921"}"#).unwrap();
        assert_eq!(info.expires_in, 315_359_921);
    }
}
