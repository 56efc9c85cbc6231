//! Theme directory search, install, update and removal.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::plugins::{InstallArgs, SearchArgs};
use super::{delete, empty_schema, get, post};
use crate::mcp::server::ToolDefinition;
use crate::tools::{parse_args, ToolOutcome};
use crate::wordpress::{Query, WpClient};

fn stylesheet_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "stylesheet": { "type": "string", "description": "Theme folder name" }
        },
        "required": ["stylesheet"]
    })
}

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "mcp_search_themes",
            "Search WordPress.org theme repository",
            json!({
                "type": "object",
                "properties": {
                    "search": { "type": "string", "description": "Search query" },
                    "per_page": { "type": "integer", "default": 10, "description": "Results per page" }
                },
                "required": ["search"]
            }),
        ),
        ToolDefinition::new(
            "mcp_install_theme",
            "Install a theme from WordPress.org by slug",
            json!({
                "type": "object",
                "properties": {
                    "slug": { "type": "string", "description": "Theme slug from WordPress.org" },
                    "activate": { "type": "boolean", "default": false, "description": "Activate after install" }
                },
                "required": ["slug"]
            }),
        ),
        ToolDefinition::new(
            "mcp_update_theme",
            "Update a single theme to latest version",
            stylesheet_schema(),
        ),
        ToolDefinition::new(
            "mcp_update_all_themes",
            "Update all themes with available updates",
            empty_schema(),
        ),
        ToolDefinition::new("mcp_delete_theme", "Delete an inactive theme", stylesheet_schema()),
    ]
}

#[derive(Debug, Deserialize, Serialize)]
struct StylesheetArgs {
    stylesheet: String,
}

pub(super) async fn call(client: &WpClient, name: &str, arguments: &Value) -> Option<ToolOutcome> {
    let outcome = match name {
        "mcp_search_themes" => search(client, arguments).await,
        "mcp_install_theme" => install(client, arguments).await,
        "mcp_update_theme" => update(client, arguments).await,
        "mcp_update_all_themes" => post(client, "/themes/update-all", &json!({})).await,
        "mcp_delete_theme" => remove(client, arguments).await,
        _ => return None,
    };
    Some(outcome)
}

async fn search(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: SearchArgs = parse_args(arguments)?;
    let query = Query::new()
        .param("search", &args.search)
        .param("per_page", args.per_page);
    get(client, "/themes/search", &query).await
}

async fn install(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: InstallArgs = parse_args(arguments)?;
    post(client, "/themes/install", &args).await
}

async fn update(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: StylesheetArgs = parse_args(arguments)?;
    post(client, "/themes/update", &args).await
}

async fn remove(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: StylesheetArgs = parse_args(arguments)?;
    let query = Query::new().param("stylesheet", &args.stylesheet);
    delete(client, "/themes/delete", &query).await
}
