//! Media library tools.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::args::{self, MediaType};
use super::{json_result, parse_args, ToolOutcome};
use crate::mcp::server::ToolDefinition;
use crate::projection::{project_media, MediaSource, ProjectedMedia};
use crate::wordpress::{Query, WpClient};

const MEDIA: &str = "/wp/v2/media";

pub(crate) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "wp_list_media",
            "List media library items",
            json!({
                "type": "object",
                "properties": {
                    "per_page": { "type": "integer", "default": 20, "description": "Items per page (max 100)" },
                    "page": { "type": "integer", "default": 1, "description": "Page number" },
                    "media_type": {
                        "type": "string",
                        "enum": ["image", "video", "audio", "application"],
                        "description": "Filter by type"
                    },
                    "search": { "type": "string", "description": "Search term" }
                }
            }),
        ),
        ToolDefinition::new(
            "wp_get_media",
            "Get a media item by ID",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "Media ID" }
                },
                "required": ["id"]
            }),
        ),
        ToolDefinition::new(
            "wp_update_media",
            "Update media item metadata (title, alt text, caption)",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "Media ID" },
                    "title": { "type": "string", "description": "Title" },
                    "alt_text": { "type": "string", "description": "Alt text for images" },
                    "caption": { "type": "string", "description": "Caption" },
                    "description": { "type": "string", "description": "Description" }
                },
                "required": ["id"]
            }),
        ),
        ToolDefinition::new(
            "wp_delete_media",
            "Delete a media item",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "Media ID" },
                    "force": { "type": "boolean", "default": true, "description": "Permanently delete (bypass trash)" }
                },
                "required": ["id"]
            }),
        ),
    ]
}

#[derive(Debug, Deserialize)]
struct ListMediaArgs {
    #[serde(default = "args::per_page_20")]
    per_page: u64,
    #[serde(default = "args::page_one")]
    page: u64,
    #[serde(default)]
    media_type: Option<MediaType>,
    #[serde(default)]
    search: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IdArgs {
    id: u64,
}

#[derive(Debug, Deserialize, Serialize)]
struct MediaFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alt_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateMediaArgs {
    id: u64,
    #[serde(flatten)]
    fields: MediaFields,
}

#[derive(Debug, Deserialize)]
struct DeleteMediaArgs {
    id: u64,
    #[serde(default = "args::yes")]
    force: bool,
}

pub(crate) async fn list_media(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: ListMediaArgs = parse_args(arguments)?;
    let query = Query::new()
        .param("per_page", args.per_page)
        .param("page", args.page)
        .opt("media_type", args.media_type.map(MediaType::as_str))
        .opt("search", args.search.as_ref());
    let items: Vec<MediaSource> = client.get(MEDIA, &query).await?;
    let projected: Vec<ProjectedMedia> = items.iter().map(project_media).collect();
    json_result(&projected)
}

pub(crate) async fn get_media(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: IdArgs = parse_args(arguments)?;
    let item: MediaSource = client
        .get(&format!("{MEDIA}/{}", args.id), &Query::new())
        .await?;
    json_result(&project_media(&item))
}

pub(crate) async fn update_media(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: UpdateMediaArgs = parse_args(arguments)?;
    let item: MediaSource = client
        .put(&format!("{MEDIA}/{}", args.id), &args.fields)
        .await?;
    json_result(&project_media(&item))
}

pub(crate) async fn delete_media(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: DeleteMediaArgs = parse_args(arguments)?;
    let query = Query::new().param("force", args::force_flag(args.force));
    let _: Value = client
        .delete(&format!("{MEDIA}/{}", args.id), &query)
        .await?;
    json_result(&json!({ "deleted": true, "id": args.id }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_forces_by_default() {
        let args: DeleteMediaArgs = parse_args(&json!({"id": 7})).unwrap();
        assert!(args.force);
    }

    #[test]
    fn unknown_media_type_rejected() {
        assert!(parse_args::<ListMediaArgs>(&json!({"media_type": "pdf"})).is_err());
    }
}
