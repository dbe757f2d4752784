//! Kagi API adapter
//!
//! Implements [`KagiGateway`](kagi_application::KagiGateway) over HTTP.

mod client;
mod types;

pub use client::{DEFAULT_BASE_URL, KagiClient, KagiClientError};
