//! # Ctct Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The reqwest-backed [`HttpClient`] transport
//! - The OAuth2 helper for the Constant Contact authorization server
//! - Configuration loading from environment variables and files
//!
//! ## Architecture
//! - Implements traits defined in `ctct-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod config;
pub mod errors;
pub mod http;
pub mod oauth;
pub mod sdk;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use oauth::{CtctOAuth2, TokenInfo, TokenSet};
pub use sdk::{build_client, build_oauth, client_from_env};
