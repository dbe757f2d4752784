//! Web search domain: ranked hits returned by a search backend.

pub mod entities;

pub use entities::{SearchResult, format_results};
