//! Plugin directory search, install and update.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{empty_schema, get, post};
use crate::mcp::server::ToolDefinition;
use crate::tools::args;
use crate::tools::{parse_args, ToolOutcome};
use crate::wordpress::{Query, WpClient};

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "mcp_search_plugins",
            "Search WordPress.org plugin repository",
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
            "mcp_install_plugin",
            "Install a plugin from WordPress.org by slug",
            json!({
                "type": "object",
                "properties": {
                    "slug": { "type": "string", "description": "Plugin slug from WordPress.org" },
                    "activate": { "type": "boolean", "default": false, "description": "Activate after install" }
                },
                "required": ["slug"]
            }),
        ),
        ToolDefinition::new(
            "mcp_update_plugin",
            "Update a single plugin to latest version",
            json!({
                "type": "object",
                "properties": {
                    "plugin": { "type": "string", "description": "Plugin file path (e.g., akismet/akismet.php)" }
                },
                "required": ["plugin"]
            }),
        ),
        ToolDefinition::new(
            "mcp_update_all_plugins",
            "Update all plugins with available updates",
            empty_schema(),
        ),
    ]
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchArgs {
    pub search: String,
    #[serde(default = "args::per_page_10")]
    pub per_page: u64,
}

#[derive(Debug, Deserialize, Serialize)]
pub(super) struct InstallArgs {
    pub slug: String,
    #[serde(default)]
    pub activate: bool,
}

#[derive(Debug, Deserialize, Serialize)]
struct PluginArgs {
    plugin: String,
}

pub(super) async fn call(client: &WpClient, name: &str, arguments: &Value) -> Option<ToolOutcome> {
    let outcome = match name {
        "mcp_search_plugins" => search(client, arguments).await,
        "mcp_install_plugin" => install(client, arguments).await,
        "mcp_update_plugin" => update(client, arguments).await,
        "mcp_update_all_plugins" => post(client, "/plugins/update-all", &json!({})).await,
        _ => return None,
    };
    Some(outcome)
}

async fn search(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: SearchArgs = parse_args(arguments)?;
    let query = Query::new()
        .param("search", &args.search)
        .param("per_page", args.per_page);
    get(client, "/plugins/search", &query).await
}

async fn install(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: InstallArgs = parse_args(arguments)?;
    post(client, "/plugins/install", &args).await
}

async fn update(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: PluginArgs = parse_args(arguments)?;
    post(client, "/plugins/update", &args).await
}
