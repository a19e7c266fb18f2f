//! Shared test helpers for `ctct-core` integration tests.
//!
//! Provides an in-memory transport that records every request and replays
//! scripted responses, so service tests can assert on the exact wire shape.

pub mod transport;

#[allow(unused_imports)]
pub use transport::RecordingTransport;
