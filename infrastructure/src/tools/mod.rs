//! Tool schema export
//!
//! Converts the registered tool definitions into the JSON Schema a host
//! registers them with.

mod schema;

pub use schema::JsonSchemaToolConverter;
