//! # Ctct Domain
//!
//! Wire-level data types for the Constant Contact v2 API.
//!
//! This crate contains:
//! - The open-ended [`Record`] type and its [`FieldValue`] cells
//! - Declarative field specs for every resource group
//! - Paginated results, query parameters and entity references
//! - The SDK error taxonomy and configuration structures
//! - Endpoint and OAuth constants
//!
//! ## Architecture
//! - No dependencies on other ctct crates
//! - No I/O, no HTTP, no async
//! - Resources are configuration ([`FieldSpec`] values), not types

pub mod config;
pub mod constants;
pub mod entity;
pub mod errors;
pub mod fields;
pub mod pagination;
pub mod query;
pub mod record;
pub mod resources;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use entity::EntityRef;
pub use errors::*;
pub use fields::{Field, FieldSpec};
pub use pagination::PaginatedResult;
pub use query::QueryParams;
pub use record::{FieldValue, Record};
