//! Installed plugin tools.
//!
//! Plugins are addressed by their file identifier (`akismet/akismet.php`),
//! which is percent-encoded into a single path segment.

use serde::Deserialize;
use serde_json::{json, Value};

use super::args::ActivationStatus;
use super::{json_result, parse_args, ToolOutcome};
use crate::mcp::server::ToolDefinition;
use crate::projection::{project_plugin, PluginSource, ProjectedPlugin};
use crate::wordpress::{encode_segment, Query, WpClient};

const PLUGINS: &str = "/wp/v2/plugins";

fn plugin_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "plugin": {
                "type": "string",
                "description": "Plugin identifier (e.g., 'akismet/akismet.php')"
            }
        },
        "required": ["plugin"]
    })
}

pub(crate) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "wp_list_plugins",
            "List all installed plugins",
            json!({
                "type": "object",
                "properties": {
                    "status": { "type": "string", "enum": ["active", "inactive"], "description": "Filter by status" }
                }
            }),
        ),
        ToolDefinition::new("wp_get_plugin", "Get plugin details by slug", plugin_schema()),
        ToolDefinition::new("wp_activate_plugin", "Activate a plugin", plugin_schema()),
        ToolDefinition::new("wp_deactivate_plugin", "Deactivate a plugin", plugin_schema()),
        ToolDefinition::new(
            "wp_delete_plugin",
            "Delete/uninstall a plugin (must be deactivated first)",
            plugin_schema(),
        ),
    ]
}

#[derive(Debug, Deserialize)]
struct ListPluginsArgs {
    #[serde(default)]
    status: Option<ActivationStatus>,
}

#[derive(Debug, Deserialize)]
struct PluginArgs {
    plugin: String,
}

impl PluginArgs {
    fn endpoint(&self) -> String {
        format!("{PLUGINS}/{}", encode_segment(&self.plugin))
    }
}

pub(crate) async fn list_plugins(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: ListPluginsArgs = parse_args(arguments)?;
    let query = Query::new().opt("status", args.status.map(ActivationStatus::as_str));
    let plugins: Vec<PluginSource> = client.get(PLUGINS, &query).await?;
    let projected: Vec<ProjectedPlugin> = plugins.iter().map(project_plugin).collect();
    json_result(&projected)
}

pub(crate) async fn get_plugin(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: PluginArgs = parse_args(arguments)?;
    let plugin: PluginSource = client.get(&args.endpoint(), &Query::new()).await?;
    json_result(&project_plugin(&plugin))
}

async fn set_status(client: &WpClient, arguments: &Value, status: ActivationStatus) -> ToolOutcome {
    let args: PluginArgs = parse_args(arguments)?;
    let plugin: PluginSource = client
        .put(&args.endpoint(), &json!({ "status": status.as_str() }))
        .await?;
    json_result(&project_plugin(&plugin))
}

pub(crate) async fn activate_plugin(client: &WpClient, arguments: &Value) -> ToolOutcome {
    set_status(client, arguments, ActivationStatus::Active).await
}

pub(crate) async fn deactivate_plugin(client: &WpClient, arguments: &Value) -> ToolOutcome {
    set_status(client, arguments, ActivationStatus::Inactive).await
}

pub(crate) async fn delete_plugin(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: PluginArgs = parse_args(arguments)?;
    let _: Value = client.delete(&args.endpoint(), &Query::new()).await?;
    json_result(&json!({ "deleted": true, "plugin": args.plugin }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_identifier_is_one_segment() {
        let args: PluginArgs = parse_args(&json!({"plugin": "akismet/akismet.php"})).unwrap();
        assert_eq!(args.endpoint(), "/wp/v2/plugins/akismet%2Fakismet.php");
    }
}
