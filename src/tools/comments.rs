//! Comment tools, including batch moderation.

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use super::args::{self, CommentStatus};
use super::{json_result, parse_args, ToolOutcome};
use crate::mcp::server::ToolDefinition;
use crate::projection::{project_comment, CommentSource, ProjectedComment};
use crate::wordpress::{Query, WpClient, WpError};

const COMMENTS: &str = "/wp/v2/comments";

pub(crate) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "wp_list_comments",
            "List comments",
            json!({
                "type": "object",
                "properties": {
                    "per_page": { "type": "integer", "default": 20, "description": "Comments per page" },
                    "page": { "type": "integer", "default": 1, "description": "Page number" },
                    "post": { "type": "integer", "description": "Filter by post ID" },
                    "status": { "type": "string", "enum": CommentStatus::VALUES, "description": "Comment status" }
                }
            }),
        ),
        ToolDefinition::new(
            "wp_get_comment",
            "Get a comment by ID",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "Comment ID" }
                },
                "required": ["id"]
            }),
        ),
        ToolDefinition::new(
            "wp_create_comment",
            "Create a comment on a post",
            json!({
                "type": "object",
                "properties": {
                    "post": { "type": "integer", "description": "Post ID" },
                    "content": { "type": "string", "description": "Comment content" },
                    "parent": { "type": "integer", "default": 0, "description": "Parent comment ID (for replies)" },
                    "author_name": { "type": "string", "description": "Author name (if not logged in)" },
                    "author_email": { "type": "string", "description": "Author email (if not logged in)" }
                },
                "required": ["post", "content"]
            }),
        ),
        ToolDefinition::new(
            "wp_update_comment",
            "Update a comment (approve, edit content, etc.)",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "Comment ID" },
                    "content": { "type": "string", "description": "Comment content" },
                    "status": { "type": "string", "enum": CommentStatus::VALUES, "description": "Comment status" }
                },
                "required": ["id"]
            }),
        ),
        ToolDefinition::new(
            "wp_delete_comment",
            "Delete a comment",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "Comment ID" },
                    "force": { "type": "boolean", "default": false, "description": "Bypass trash and delete permanently" }
                },
                "required": ["id"]
            }),
        ),
        ToolDefinition::new(
            "wp_moderate_comments",
            "Batch moderate comments by status",
            json!({
                "type": "object",
                "properties": {
                    "ids": { "type": "array", "items": { "type": "integer" }, "description": "Comment IDs" },
                    "status": { "type": "string", "enum": CommentStatus::VALUES, "description": "New status" }
                },
                "required": ["ids", "status"]
            }),
        ),
    ]
}

#[derive(Debug, Deserialize)]
struct ListCommentsArgs {
    #[serde(default = "args::per_page_20")]
    per_page: u64,
    #[serde(default = "args::page_one")]
    page: u64,
    #[serde(default)]
    post: Option<u64>,
    #[serde(default)]
    status: Option<CommentStatus>,
}

#[derive(Debug, Deserialize)]
struct IdArgs {
    id: u64,
}

#[derive(Debug, Deserialize, Serialize)]
struct CreateCommentArgs {
    post: u64,
    content: String,
    #[serde(default)]
    parent: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author_email: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
struct CommentFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<CommentStatus>,
}

#[derive(Debug, Deserialize)]
struct UpdateCommentArgs {
    id: u64,
    #[serde(flatten)]
    fields: CommentFields,
}

#[derive(Debug, Deserialize)]
struct DeleteCommentArgs {
    id: u64,
    #[serde(default)]
    force: bool,
}

#[derive(Debug, Deserialize)]
struct ModerateArgs {
    ids: Vec<u64>,
    status: CommentStatus,
}

/// Result of moderating one comment in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModerationOutcome {
    /// Comment ID, as given.
    pub id: u64,
    /// Whether the update succeeded.
    pub success: bool,
    /// Error message when the update failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// HTTP status when the API rejected the update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ModerationOutcome {
    const fn succeeded(id: u64) -> Self {
        Self {
            id,
            success: true,
            error: None,
            status: None,
        }
    }

    fn failed(id: u64, error: &WpError) -> Self {
        Self {
            id,
            success: false,
            error: Some(error.to_string()),
            status: error.status(),
        }
    }
}

/// Sets `status` on every comment in `ids` concurrently.
///
/// All updates are started before any is awaited. A failed update is
/// recorded in its slot and never affects the others. Outcomes are returned
/// in the order of `ids`.
pub async fn moderate_comments(
    client: &WpClient,
    ids: &[u64],
    status: CommentStatus,
) -> Vec<ModerationOutcome> {
    let body = json!({ "status": status.as_str() });
    debug!(count = ids.len(), status = status.as_str(), "Moderating comments");

    let updates = ids.iter().map(|&id| {
        let body = &body;
        async move {
            match client
                .put::<Value, _>(&format!("{COMMENTS}/{id}"), body)
                .await
            {
                Ok(_) => ModerationOutcome::succeeded(id),
                Err(e) => ModerationOutcome::failed(id, &e),
            }
        }
    });

    join_all(updates).await
}

pub(crate) async fn list_comments(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: ListCommentsArgs = parse_args(arguments)?;
    let query = Query::new()
        .param("per_page", args.per_page)
        .param("page", args.page)
        .opt("post", args.post)
        .opt("status", args.status.map(CommentStatus::as_str));
    let comments: Vec<CommentSource> = client.get(COMMENTS, &query).await?;
    let projected: Vec<ProjectedComment> = comments.iter().map(project_comment).collect();
    json_result(&projected)
}

pub(crate) async fn get_comment(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: IdArgs = parse_args(arguments)?;
    let comment: CommentSource = client
        .get(&format!("{COMMENTS}/{}", args.id), &Query::new())
        .await?;
    json_result(&project_comment(&comment))
}

pub(crate) async fn create_comment(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: CreateCommentArgs = parse_args(arguments)?;
    let comment: CommentSource = client.post(COMMENTS, &args).await?;
    json_result(&project_comment(&comment))
}

pub(crate) async fn update_comment(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: UpdateCommentArgs = parse_args(arguments)?;
    let comment: CommentSource = client
        .put(&format!("{COMMENTS}/{}", args.id), &args.fields)
        .await?;
    json_result(&project_comment(&comment))
}

pub(crate) async fn delete_comment(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: DeleteCommentArgs = parse_args(arguments)?;
    let query = Query::new().param("force", args::force_flag(args.force));
    let _: Value = client
        .delete(&format!("{COMMENTS}/{}", args.id), &query)
        .await?;
    json_result(&json!({ "deleted": true, "id": args.id }))
}

pub(crate) async fn moderate(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: ModerateArgs = parse_args(arguments)?;
    let moderated = moderate_comments(client, &args.ids, args.status).await;
    json_result(&json!({ "moderated": moderated }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_shapes() {
        let ok = serde_json::to_value(ModerationOutcome::succeeded(1)).unwrap();
        assert_eq!(ok, json!({"id": 1, "success": true}));

        let failed = ModerationOutcome::failed(2, &WpError::api(403, "forbidden"));
        let failed = serde_json::to_value(failed).unwrap();
        assert_eq!(
            failed,
            json!({
                "id": 2,
                "success": false,
                "error": "WordPress API error 403: forbidden",
                "status": 403
            })
        );
    }

    #[test]
    fn moderate_requires_status() {
        assert!(parse_args::<ModerateArgs>(&json!({"ids": [1, 2]})).is_err());
        assert!(parse_args::<ModerateArgs>(&json!({"ids": [1], "status": "approve"})).is_ok());
    }

    #[test]
    fn create_defaults_parent() {
        let args: CreateCommentArgs =
            parse_args(&json!({"post": 4, "content": "Nice"})).unwrap();
        let body = serde_json::to_value(&args).unwrap();
        assert_eq!(body, json!({"post": 4, "content": "Nice", "parent": 0}));
    }
}
