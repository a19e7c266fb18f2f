//! Configuration loader
//!
//! Loads SDK configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `CTCT_API_KEY` is missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `CTCT_API_KEY`: Application key (required)
//! - `CTCT_BASE_URL`: API root, defaults to the production v2 root
//! - `CTCT_TIMEOUT_SECS`: Request timeout in seconds
//! - `CTCT_USER_AGENT`: `User-Agent` header value
//! - `CTCT_CLIENT_ID`, `CTCT_CLIENT_SECRET`, `CTCT_REDIRECT_URI`: OAuth
//!   registration; all three or none
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./ctct.json` or `./ctct.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names in the parent directory
//! 4. The same names next to the executable

use std::path::{Path, PathBuf};

use ctct_domain::{CtctError, OAuthSettings, Result, SdkConfig};
use url::Url;

use crate::errors::InfraError;

const CANDIDATE_NAMES: [&str; 4] = ["ctct.json", "ctct.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `CtctError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - The loaded configuration fails validation
pub fn load() -> Result<SdkConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `CtctError::Config` if `CTCT_API_KEY` is missing, a value is
/// malformed, or the OAuth variables are only partially set.
pub fn load_from_env() -> Result<SdkConfig> {
    let mut config = SdkConfig::new(env_var("CTCT_API_KEY")?);

    if let Some(base_url) = optional_env_var("CTCT_BASE_URL") {
        config.base_url = base_url;
    }
    if let Some(timeout) = optional_env_var("CTCT_TIMEOUT_SECS") {
        config.timeout_secs =
            timeout.parse::<u64>().map_err(|e| CtctError::Config(format!("Invalid timeout: {e}")))?;
    }
    if let Some(agent) = optional_env_var("CTCT_USER_AGENT") {
        config.user_agent = agent;
    }
    config.oauth = oauth_from_env()?;

    validate(config)
}

fn oauth_from_env() -> Result<Option<OAuthSettings>> {
    let Some(client_id) = optional_env_var("CTCT_CLIENT_ID") else {
        return Ok(None);
    };
    Ok(Some(OAuthSettings {
        client_id,
        client_secret: env_var("CTCT_CLIENT_SECRET")?,
        redirect_uri: env_var("CTCT_REDIRECT_URI")?,
    }))
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `CtctError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - The loaded configuration fails validation
pub fn load_from_file(path: Option<PathBuf>) -> Result<SdkConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CtctError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths()
            .ok_or_else(|| CtctError::Config("No config file found in any of the standard locations".to_string()))?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CtctError::Config(format!("Failed to read config file: {e}")))?;

    validate(parse_config(&contents, &config_path)?)
}

/// Parse configuration from string content; format by file extension.
fn parse_config(contents: &str, path: &Path) -> Result<SdkConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents).map_err(|e| InfraError::from(e).into()),
        _ => Err(CtctError::Config(format!("Unsupported config format: {extension}"))),
    }
}

fn validate(mut config: SdkConfig) -> Result<SdkConfig> {
    if config.api_key.trim().is_empty() {
        return Err(CtctError::Config("api_key must not be empty".to_string()));
    }

    let base_url =
        Url::parse(&config.base_url).map_err(|e| CtctError::Config(format!("Invalid base_url: {e}")))?;
    if !matches!(base_url.scheme(), "http" | "https") {
        return Err(CtctError::Config(format!("base_url must be http(s), got {}", base_url.scheme())));
    }
    config.base_url = config.normalized_base_url();

    if config.timeout_secs == 0 {
        return Err(CtctError::Config("timeout_secs must be greater than zero".to_string()));
    }

    Ok(config)
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.join(".."));
        dirs.insert(0, cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter().flat_map(|dir| CANDIDATE_NAMES.iter().map(move |name| dir.join(name))).find(|path| path.exists())
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    optional_env_var(key).ok_or_else(|| CtctError::Config(format!("Missing required environment variable: {key}")))
}

/// Environment variable, treating empty values as unset.
fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
