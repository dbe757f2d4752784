//! Tool domain traits
//!
//! Contains pure domain logic traits for tool validation.
//! The async `Tool` trait is defined in the application layer.

use super::entities::{ToolCall, ToolDefinition};

/// Validator for tool calls
///
/// This is a pure domain trait that validates tool calls
/// against their definitions without any I/O operations.
pub trait ToolValidator {
    /// Validate a tool call against its definition
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String>;
}

/// Default implementation of ToolValidator
///
/// Checks required parameters, rejects unknown ones, enforces literal
/// value sets and top-level JSON types.
#[derive(Debug, Clone, Default)]
pub struct DefaultToolValidator;

impl ToolValidator for DefaultToolValidator {
    fn validate(&self, call: &ToolCall, definition: &ToolDefinition) -> Result<(), String> {
        for param in &definition.parameters {
            if param.required && !call.arguments.contains_key(&param.name) {
                return Err(format!(
                    "Missing required parameter '{}' for tool '{}'",
                    param.name, definition.name
                ));
            }
        }

        for (arg_name, value) in &call.arguments {
            let Some(param) = definition.parameter(arg_name) else {
                return Err(format!(
                    "Unknown parameter '{}' for tool '{}'",
                    arg_name, definition.name
                ));
            };

            let type_ok = match param.param_type.as_str() {
                "array" => value.is_array(),
                "integer" => value.is_i64() || value.is_u64(),
                "number" => value.is_number(),
                "boolean" => value.is_boolean(),
                _ => value.is_string(),
            };
            if !type_ok {
                return Err(format!(
                    "Parameter '{}' for tool '{}' must be of type {}",
                    arg_name, definition.name, param.param_type
                ));
            }

            if let Some(s) = value.as_str()
                && !param.allowed_values.is_empty()
                && !param.allowed_values.iter().any(|v| v == s)
            {
                return Err(format!(
                    "Parameter '{}' for tool '{}' must be one of: {}",
                    arg_name,
                    definition.name,
                    param.allowed_values.join(", ")
                ));
            }
        }

        Ok(())
    }
}
