//! # Ctct Core
//!
//! Request building, response mapping and resource services for the
//! Constant Contact v2 API.
//!
//! This crate contains:
//! - The [`HttpTransport`] port and the [`RequestDescriptor`] it executes
//! - The data mapper, cursor extraction and multipart encoding
//! - One service per resource group and the [`ConstantContact`] facade
//!
//! ## Architecture Principles
//! - Only depends on `ctct-domain`
//! - No sockets, no TLS, no runtime: transports live in `ctct-infra`
//! - Every operation is one request and one response

pub mod callback;
pub mod facade;
pub mod mapper;
pub mod multipart;
pub mod pagination;
pub mod ports;
pub mod request;
pub mod response;
pub mod services;

pub use callback::{deliver, CompletionExt};
pub use facade::ConstantContact;
pub use multipart::{build_multipart, Multipart};
pub use ports::{HttpTransport, RawResponse};
pub use request::{build_url, headers, HttpMethod, RequestBody, RequestDescriptor};
pub use services::{
    AccountService, ActivityService, BaseService, CampaignScheduleService, ContactService, EmailMarketingService,
    ListService, TrackingService,
};
