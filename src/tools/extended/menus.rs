//! Navigation menus, items and theme locations.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{delete, empty_schema, get, post};
use crate::mcp::server::ToolDefinition;
use crate::tools::args::MenuObjectType;
use crate::tools::{parse_args, ToolOutcome};
use crate::wordpress::{Query, WpClient};

fn menu_id_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": { "type": "integer", "description": "Menu ID" }
        },
        "required": ["id"]
    })
}

pub(super) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new("mcp_list_menus", "List all navigation menus", empty_schema()),
        ToolDefinition::new(
            "mcp_get_menu_locations",
            "Get registered menu locations",
            empty_schema(),
        ),
        ToolDefinition::new("mcp_get_menu", "Get a menu with all its items", menu_id_schema()),
        ToolDefinition::new(
            "mcp_create_menu",
            "Create a new navigation menu",
            json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Menu name" }
                },
                "required": ["name"]
            }),
        ),
        ToolDefinition::new("mcp_delete_menu", "Delete a navigation menu", menu_id_schema()),
        ToolDefinition::new(
            "mcp_add_menu_item",
            "Add an item to a menu",
            json!({
                "type": "object",
                "properties": {
                    "menu_id": { "type": "integer", "description": "Menu ID" },
                    "title": { "type": "string", "description": "Menu item title" },
                    "url": { "type": "string", "description": "URL for custom links" },
                    "object_type": {
                        "type": "string",
                        "enum": ["custom", "post_type", "taxonomy"],
                        "default": "custom",
                        "description": "Item type"
                    },
                    "object": { "type": "string", "description": "Object type (page, product_cat, etc.)" },
                    "object_id": { "type": "integer", "description": "Object ID" },
                    "parent": { "type": "integer", "default": 0, "description": "Parent menu item ID" },
                    "position": { "type": "integer", "description": "Position in menu" }
                },
                "required": ["menu_id", "title"]
            }),
        ),
        ToolDefinition::new(
            "mcp_delete_menu_item",
            "Delete a menu item",
            json!({
                "type": "object",
                "properties": {
                    "item_id": { "type": "integer", "description": "Menu item ID" }
                },
                "required": ["item_id"]
            }),
        ),
        ToolDefinition::new(
            "mcp_assign_menu_location",
            "Assign a menu to a theme location",
            json!({
                "type": "object",
                "properties": {
                    "menu_id": { "type": "integer", "description": "Menu ID (0 to unassign)" },
                    "location": { "type": "string", "description": "Theme location slug" }
                },
                "required": ["menu_id", "location"]
            }),
        ),
    ]
}

#[derive(Debug, Deserialize)]
struct MenuIdArgs {
    id: u64,
}

#[derive(Debug, Deserialize, Serialize)]
struct CreateMenuArgs {
    name: String,
}

#[derive(Debug, Deserialize, Serialize)]
struct MenuItem {
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default)]
    object_type: MenuObjectType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    object: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    object_id: Option<u64>,
    #[serde(default)]
    parent: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct AddItemArgs {
    menu_id: u64,
    #[serde(flatten)]
    item: MenuItem,
}

#[derive(Debug, Deserialize)]
struct ItemIdArgs {
    item_id: u64,
}

#[derive(Debug, Deserialize, Serialize)]
struct AssignArgs {
    menu_id: u64,
    location: String,
}

pub(super) async fn call(client: &WpClient, name: &str, arguments: &Value) -> Option<ToolOutcome> {
    let outcome = match name {
        "mcp_list_menus" => get(client, "/menus", &Query::new()).await,
        "mcp_get_menu_locations" => get(client, "/menus/locations", &Query::new()).await,
        "mcp_get_menu" => get_menu(client, arguments).await,
        "mcp_create_menu" => create_menu(client, arguments).await,
        "mcp_delete_menu" => delete_menu(client, arguments).await,
        "mcp_add_menu_item" => add_item(client, arguments).await,
        "mcp_delete_menu_item" => delete_item(client, arguments).await,
        "mcp_assign_menu_location" => assign_location(client, arguments).await,
        _ => return None,
    };
    Some(outcome)
}

async fn get_menu(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: MenuIdArgs = parse_args(arguments)?;
    get(client, &format!("/menus/{}", args.id), &Query::new()).await
}

async fn create_menu(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: CreateMenuArgs = parse_args(arguments)?;
    post(client, "/menus", &args).await
}

async fn delete_menu(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: MenuIdArgs = parse_args(arguments)?;
    delete(client, &format!("/menus/{}", args.id), &Query::new()).await
}

async fn add_item(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: AddItemArgs = parse_args(arguments)?;
    post(client, &format!("/menus/{}/items", args.menu_id), &args.item).await
}

async fn delete_item(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: ItemIdArgs = parse_args(arguments)?;
    delete(client, &format!("/menus/items/{}", args.item_id), &Query::new()).await
}

async fn assign_location(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: AssignArgs = parse_args(arguments)?;
    post(client, "/menus/locations/assign", &args).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_item_defaults() {
        let args: AddItemArgs =
            parse_args(&json!({"menu_id": 2, "title": "Home", "url": "/"})).unwrap();
        assert_eq!(args.menu_id, 2);
        assert_eq!(
            serde_json::to_value(&args.item).unwrap(),
            json!({"title": "Home", "url": "/", "object_type": "custom", "parent": 0})
        );
    }
}
