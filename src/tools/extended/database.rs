//! Database inspection and cleanup.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{empty_schema, get, post};
use crate::mcp::server::ToolDefinition;
use crate::tools::{args, parse_args, ToolOutcome};
use crate::wordpress::{Query, WpClient};

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "mcp_get_tables",
            "List all database tables with sizes",
            empty_schema(),
        ),
        ToolDefinition::new(
            "mcp_search_replace",
            "Search and replace strings in database (serialization-safe)",
            json!({
                "type": "object",
                "properties": {
                    "search": { "type": "string", "description": "String to search for" },
                    "replace": { "type": "string", "description": "Replacement string" },
                    "tables": { "type": "array", "items": { "type": "string" }, "description": "Specific tables (empty = all)" },
                    "dry_run": { "type": "boolean", "default": true, "description": "Preview without applying" }
                },
                "required": ["search", "replace"]
            }),
        ),
        ToolDefinition::new(
            "mcp_optimize_tables",
            "Optimize all database tables",
            empty_schema(),
        ),
        ToolDefinition::new(
            "mcp_clean_revisions",
            "Delete old post revisions",
            json!({
                "type": "object",
                "properties": {
                    "keep": { "type": "integer", "default": 5, "description": "Revisions to keep per post" }
                }
            }),
        ),
        ToolDefinition::new(
            "mcp_clean_comments",
            "Delete spam and trashed comments",
            empty_schema(),
        ),
    ]
}

/// Body of `mcp_search_replace`. Dry run unless explicitly disabled.
#[derive(Debug, Deserialize, Serialize)]
struct SearchReplaceArgs {
    search: String,
    replace: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tables: Option<Vec<String>>,
    #[serde(default = "args::yes")]
    dry_run: bool,
}

const fn keep_five() -> u64 {
    5
}

#[derive(Debug, Deserialize, Serialize)]
struct CleanRevisionsArgs {
    #[serde(default = "keep_five")]
    keep: u64,
}

pub(super) async fn call(client: &WpClient, name: &str, arguments: &Value) -> Option<ToolOutcome> {
    let outcome = match name {
        "mcp_get_tables" => get(client, "/db/tables", &Query::new()).await,
        "mcp_search_replace" => search_replace(client, arguments).await,
        "mcp_optimize_tables" => post(client, "/db/optimize", &json!({})).await,
        "mcp_clean_revisions" => clean_revisions(client, arguments).await,
        "mcp_clean_comments" => post(client, "/db/clean-comments", &json!({})).await,
        _ => return None,
    };
    Some(outcome)
}

async fn search_replace(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: SearchReplaceArgs = parse_args(arguments)?;
    post(client, "/db/search-replace", &args).await
}

async fn clean_revisions(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: CleanRevisionsArgs = parse_args(arguments)?;
    post(client, "/db/clean-revisions", &args).await
}
