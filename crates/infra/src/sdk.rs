//! Wiring from configuration to a ready client

use std::sync::Arc;
use std::time::Duration;

use ctct_core::ConstantContact;
use ctct_domain::{CtctError, Result, SdkConfig};

use crate::config;
use crate::http::HttpClient;
use crate::oauth::CtctOAuth2;

/// Build a [`ConstantContact`] client backed by [`HttpClient`].
///
/// # Errors
///
/// Returns [`CtctError::Transport`] if the HTTP client cannot be built.
pub fn build_client(config: &SdkConfig) -> Result<ConstantContact> {
    let transport = HttpClient::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()?;

    tracing::debug!(base_url = %config.normalized_base_url(), "constant contact client ready");
    Ok(ConstantContact::with_base_url(config.api_key.clone(), config.normalized_base_url(), Arc::new(transport)))
}

/// Build the OAuth helper from the configured registration.
///
/// # Errors
///
/// Returns [`CtctError::Config`] when no OAuth settings are configured.
pub fn build_oauth(config: &SdkConfig) -> Result<CtctOAuth2> {
    let settings = config
        .oauth
        .clone()
        .ok_or_else(|| CtctError::Config("OAuth settings (client_id, client_secret, redirect_uri) are not configured".into()))?;
    CtctOAuth2::new(settings)
}

/// Load configuration (see [`config::load`]) and build a client from it.
///
/// # Errors
///
/// Propagates loader and client construction errors.
pub fn client_from_env() -> Result<ConstantContact> {
    build_client(&config::load()?)
}

#[cfg(test)]
mod tests {
    use ctct_domain::OAuthSettings;

    use super::*;

    #[test]
    fn oauth_requires_settings() {
        let err = build_oauth(&SdkConfig::new("k")).unwrap_err();
        assert!(matches!(err, CtctError::Config(_)));

        let mut config = SdkConfig::new("k");
        config.oauth = Some(OAuthSettings {
            client_id: "id".into(),
            client_secret: "secret".into(),
            redirect_uri: "https://example.com/cb".into(),
        });
        assert_eq!(build_oauth(&config).unwrap().settings().client_id, "id");
    }
}
