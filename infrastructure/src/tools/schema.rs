//! JSON Schema tool converter.
//!
//! Default implementation of [`ToolSchemaPort`] producing the schema a host
//! registers the tools with.

use kagi_application::ToolSchemaPort;
use kagi_domain::{ToolDefinition, ToolParameter, ToolSpec};
use serde_json::{Map, Value, json};

/// Default implementation producing provider-neutral JSON Schema.
///
/// Handles param_type → JSON Schema type mapping:
/// - `"string"` → `"string"`
/// - `"number"` / `"integer"` / `"boolean"` → same
/// - `"array"` → `"array"` with `items` from the item type
/// - anything else → `"string"`
///
/// Allowed values become an `enum`.
pub struct JsonSchemaToolConverter;

fn schema_type(param_type: &str) -> &'static str {
    match param_type {
        "number" => "number",
        "integer" => "integer",
        "boolean" => "boolean",
        "array" => "array",
        _ => "string",
    }
}

fn parameter_schema(param: &ToolParameter) -> Value {
    let ty = schema_type(&param.param_type);

    let mut prop = Map::new();
    prop.insert("type".to_string(), json!(ty));
    prop.insert("description".to_string(), json!(param.description));

    if ty == "array" {
        let item_type = schema_type(param.item_type.as_deref().unwrap_or("string"));
        prop.insert("items".to_string(), json!({ "type": item_type }));
    }
    if !param.allowed_values.is_empty() {
        prop.insert("enum".to_string(), json!(param.allowed_values));
    }

    Value::Object(prop)
}

impl ToolSchemaPort for JsonSchemaToolConverter {
    fn tool_to_schema(&self, tool: &ToolDefinition) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in &tool.parameters {
            properties.insert(param.name.clone(), parameter_schema(param));
            if param.required {
                required.push(json!(param.name));
            }
        }

        json!({
            "name": tool.name,
            "label": tool.label,
            "description": tool.description,
            "input_schema": {
                "type": "object",
                "properties": properties,
                "required": required,
            }
        })
    }

    fn all_tools_schema(&self, spec: &ToolSpec) -> Vec<Value> {
        let mut tools: Vec<&ToolDefinition> = spec.all().collect();
        tools.sort_by_key(|t| &t.name);
        tools.into_iter().map(|t| self.tool_to_schema(t)).collect()
    }
}
