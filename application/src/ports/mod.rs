//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod kagi_gateway;
pub mod output_store;
pub mod tool_schema;
