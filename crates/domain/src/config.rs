//! Configuration structures

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// SDK configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    /// Application key appended to every request as `api_key`.
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub oauth: Option<OAuthSettings>,
}

/// OAuth2 client registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthSettings {
    pub client_id: String,
    /// Never written out; a serialized config loads back with it empty.
    #[serde(skip_serializing, default)]
    pub client_secret: String,
    pub redirect_uri: String,
}

impl SdkConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), ..Self::default() }
    }

    /// Base URL guaranteed to end with `/`.
    pub fn normalized_base_url(&self) -> String {
        if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        }
    }
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            oauth: None,
        }
    }
}
