//! Raw `wp_options` access.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{delete, get, post};
use crate::mcp::server::ToolDefinition;
use crate::tools::{args, parse_args, ToolOutcome};
use crate::wordpress::{encode_segment, Query, WpClient};

fn key_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "key": { "type": "string", "description": "Option name" }
        },
        "required": ["key"]
    })
}

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "mcp_list_options",
            "List WordPress options with optional prefix filter",
            json!({
                "type": "object",
                "properties": {
                    "prefix": { "type": "string", "description": "Filter by option name prefix" },
                    "per_page": { "type": "integer", "default": 50, "description": "Results per page" }
                }
            }),
        ),
        ToolDefinition::new("mcp_get_option", "Get a single option value", key_schema()),
        ToolDefinition::new(
            "mcp_set_option",
            "Create or update an option",
            json!({
                "type": "object",
                "properties": {
                    "key": { "type": "string", "description": "Option name" },
                    "value": { "description": "Option value (any type)" },
                    "autoload": { "type": "boolean", "default": true, "description": "Load on every page" }
                },
                "required": ["key"]
            }),
        ),
        ToolDefinition::new("mcp_delete_option", "Delete an option", key_schema()),
        ToolDefinition::new(
            "mcp_bulk_get_options",
            "Get multiple options at once",
            json!({
                "type": "object",
                "properties": {
                    "keys": { "type": "array", "items": { "type": "string" }, "description": "Array of option names" }
                },
                "required": ["keys"]
            }),
        ),
    ]
}

#[derive(Debug, Deserialize)]
struct ListArgs {
    #[serde(default)]
    prefix: Option<String>,
    #[serde(default = "args::per_page_50")]
    per_page: u64,
}

#[derive(Debug, Deserialize)]
struct KeyArgs {
    key: String,
}

impl KeyArgs {
    fn path(&self) -> String {
        format!("/options/{}", encode_segment(&self.key))
    }
}

#[derive(Debug, Deserialize)]
struct SetArgs {
    key: String,
    #[serde(default)]
    value: Value,
    #[serde(default = "args::yes")]
    autoload: bool,
}

#[derive(Debug, Serialize)]
struct SetBody<'a> {
    value: &'a Value,
    autoload: bool,
}

#[derive(Debug, Deserialize, Serialize)]
struct BulkArgs {
    keys: Vec<String>,
}

pub(super) async fn call(client: &WpClient, name: &str, arguments: &Value) -> Option<ToolOutcome> {
    let outcome = match name {
        "mcp_list_options" => list(client, arguments).await,
        "mcp_get_option" => get_one(client, arguments).await,
        "mcp_set_option" => set(client, arguments).await,
        "mcp_delete_option" => remove(client, arguments).await,
        "mcp_bulk_get_options" => bulk(client, arguments).await,
        _ => return None,
    };
    Some(outcome)
}

async fn list(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: ListArgs = parse_args(arguments)?;
    let query = Query::new()
        .param("per_page", args.per_page)
        .opt("prefix", args.prefix.as_ref());
    get(client, "/options", &query).await
}

async fn get_one(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: KeyArgs = parse_args(arguments)?;
    get(client, &args.path(), &Query::new()).await
}

async fn set(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: SetArgs = parse_args(arguments)?;
    let path = format!("/options/{}", encode_segment(&args.key));
    let body = SetBody {
        value: &args.value,
        autoload: args.autoload,
    };
    post(client, &path, &body).await
}

async fn remove(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: KeyArgs = parse_args(arguments)?;
    delete(client, &args.path(), &Query::new()).await
}

async fn bulk(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: BulkArgs = parse_args(arguments)?;
    post(client, "/options-bulk", &args).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_key_is_encoded() {
        let args: KeyArgs = parse_args(&json!({"key": "my option/x"})).unwrap();
        assert_eq!(args.path(), "/options/my%20option%2Fx");
    }

    #[test]
    fn set_body_autoloads_by_default() {
        let args: SetArgs = parse_args(&json!({"key": "k", "value": {"a": 1}})).unwrap();
        let body = SetBody {
            value: &args.value,
            autoload: args.autoload,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"value": {"a": 1}, "autoload": true})
        );
    }
}
