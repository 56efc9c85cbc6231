//! Sidebars and classic widgets.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{delete, empty_schema, get, post, put};
use crate::mcp::server::ToolDefinition;
use crate::tools::{parse_args, ToolOutcome};
use crate::wordpress::{encode_segment, Query, WpClient};

fn widget_id_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "widget_id": { "type": "string", "description": "Widget ID (e.g., text-2)" }
        },
        "required": ["widget_id"]
    })
}

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "mcp_list_sidebars",
            "List all registered sidebars",
            empty_schema(),
        ),
        ToolDefinition::new(
            "mcp_get_sidebar_widgets",
            "Get all widgets in a sidebar",
            json!({
                "type": "object",
                "properties": {
                    "sidebar_id": { "type": "string", "description": "Sidebar ID" }
                },
                "required": ["sidebar_id"]
            }),
        ),
        ToolDefinition::new(
            "mcp_list_widget_types",
            "List all available widget types",
            empty_schema(),
        ),
        ToolDefinition::new("mcp_get_widget", "Get a widget's details", widget_id_schema()),
        ToolDefinition::new(
            "mcp_add_widget",
            "Add a widget to a sidebar",
            json!({
                "type": "object",
                "properties": {
                    "sidebar_id": { "type": "string", "description": "Target sidebar ID" },
                    "widget_type": { "type": "string", "description": "Widget type (e.g., text, search)" },
                    "settings": { "type": "object", "default": {}, "description": "Widget settings" },
                    "position": { "type": "integer", "description": "Position in sidebar" }
                },
                "required": ["sidebar_id", "widget_type"]
            }),
        ),
        ToolDefinition::new(
            "mcp_update_widget",
            "Update a widget's settings",
            json!({
                "type": "object",
                "properties": {
                    "widget_id": { "type": "string", "description": "Widget ID" },
                    "settings": { "type": "object", "description": "Settings to update" }
                },
                "required": ["widget_id", "settings"]
            }),
        ),
        ToolDefinition::new(
            "mcp_delete_widget",
            "Remove a widget from its sidebar",
            widget_id_schema(),
        ),
        ToolDefinition::new(
            "mcp_move_widget",
            "Move a widget to a different sidebar",
            json!({
                "type": "object",
                "properties": {
                    "widget_id": { "type": "string", "description": "Widget ID" },
                    "sidebar_id": { "type": "string", "description": "Target sidebar ID" },
                    "position": { "type": "integer", "description": "Position in target sidebar" }
                },
                "required": ["widget_id", "sidebar_id"]
            }),
        ),
    ]
}

#[derive(Debug, Deserialize)]
struct SidebarArgs {
    sidebar_id: String,
}

#[derive(Debug, Deserialize)]
struct WidgetArgs {
    widget_id: String,
}

fn widget_path(widget_id: &str) -> String {
    format!("/widgets/{}", encode_segment(widget_id))
}

#[derive(Debug, Deserialize, Serialize)]
struct AddWidgetArgs {
    sidebar_id: String,
    widget_type: String,
    #[serde(default)]
    settings: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct UpdateWidgetArgs {
    widget_id: String,
    settings: Map<String, Value>,
}

#[derive(Debug, Serialize)]
struct Placement {
    sidebar_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct MoveWidgetArgs {
    widget_id: String,
    sidebar_id: String,
    #[serde(default)]
    position: Option<u64>,
}

pub(super) async fn call(client: &WpClient, name: &str, arguments: &Value) -> Option<ToolOutcome> {
    let outcome = match name {
        "mcp_list_sidebars" => get(client, "/widgets/sidebars", &Query::new()).await,
        "mcp_get_sidebar_widgets" => sidebar_widgets(client, arguments).await,
        "mcp_list_widget_types" => get(client, "/widgets/types", &Query::new()).await,
        "mcp_get_widget" => get_widget(client, arguments).await,
        "mcp_add_widget" => add_widget(client, arguments).await,
        "mcp_update_widget" => update_widget(client, arguments).await,
        "mcp_delete_widget" => delete_widget(client, arguments).await,
        "mcp_move_widget" => move_widget(client, arguments).await,
        _ => return None,
    };
    Some(outcome)
}

async fn sidebar_widgets(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: SidebarArgs = parse_args(arguments)?;
    let path = format!("/widgets/sidebars/{}", encode_segment(&args.sidebar_id));
    get(client, &path, &Query::new()).await
}

async fn get_widget(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: WidgetArgs = parse_args(arguments)?;
    get(client, &widget_path(&args.widget_id), &Query::new()).await
}

async fn add_widget(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: AddWidgetArgs = parse_args(arguments)?;
    post(client, "/widgets", &args).await
}

async fn update_widget(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: UpdateWidgetArgs = parse_args(arguments)?;
    let body = json!({ "settings": args.settings });
    put(client, &widget_path(&args.widget_id), &body).await
}

async fn delete_widget(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: WidgetArgs = parse_args(arguments)?;
    delete(client, &widget_path(&args.widget_id), &Query::new()).await
}

async fn move_widget(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: MoveWidgetArgs = parse_args(arguments)?;
    let body = Placement {
        sidebar_id: args.sidebar_id,
        position: args.position,
    };
    let path = format!("{}/move", widget_path(&args.widget_id));
    post(client, &path, &body).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_widget_settings_default_to_empty_object() {
        let args: AddWidgetArgs =
            parse_args(&json!({"sidebar_id": "sidebar-1", "widget_type": "search"})).unwrap();
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({"sidebar_id": "sidebar-1", "widget_type": "search", "settings": {}})
        );
    }

    #[test]
    fn settings_must_be_an_object() {
        let result =
            parse_args::<UpdateWidgetArgs>(&json!({"widget_id": "text-2", "settings": [1]}));
        assert!(result.is_err());
    }
}
