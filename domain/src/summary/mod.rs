//! Summarization domain: summary styles, engines, and request options.

pub mod entities;

pub use entities::{SummarizeOptions, Summary, SummaryEngine, SummaryType};
