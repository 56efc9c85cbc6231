//! Post tools.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::args::{self, PostOrderBy, PostStatus, SortOrder};
use super::{json_result, parse_args, ToolOutcome};
use crate::mcp::server::ToolDefinition;
use crate::projection::{project_post, rich_text, PostSource, ProjectedPost};
use crate::wordpress::{Query, WpClient};

const POSTS: &str = "/wp/v2/posts";

pub(crate) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "wp_list_posts",
            "List WordPress posts with optional filters",
            json!({
                "type": "object",
                "properties": {
                    "per_page": { "type": "integer", "default": 10, "description": "Posts per page (max 100)" },
                    "page": { "type": "integer", "default": 1, "description": "Page number" },
                    "status": { "type": "string", "enum": PostStatus::VALUES, "description": "Post status filter" },
                    "search": { "type": "string", "description": "Search term" },
                    "categories": { "type": "string", "description": "Category ID(s), comma-separated" },
                    "tags": { "type": "string", "description": "Tag ID(s), comma-separated" },
                    "author": { "type": "integer", "description": "Author ID" },
                    "orderby": { "type": "string", "enum": ["date", "title", "modified", "id"], "default": "date" },
                    "order": { "type": "string", "enum": ["asc", "desc"], "default": "desc" }
                }
            }),
        ),
        ToolDefinition::new(
            "wp_get_post",
            "Get a single post by ID",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "Post ID" },
                    "content": { "type": "boolean", "default": false, "description": "Include full content" }
                },
                "required": ["id"]
            }),
        ),
        ToolDefinition::new(
            "wp_create_post",
            "Create a new WordPress post",
            json!({
                "type": "object",
                "properties": {
                    "title": { "type": "string", "description": "Post title" },
                    "content": { "type": "string", "description": "Post content (HTML)" },
                    "status": { "type": "string", "enum": PostStatus::VALUES, "default": "draft", "description": "Post status" },
                    "excerpt": { "type": "string", "description": "Post excerpt" },
                    "categories": { "type": "array", "items": { "type": "integer" }, "description": "Category IDs" },
                    "tags": { "type": "array", "items": { "type": "integer" }, "description": "Tag IDs" },
                    "featured_media": { "type": "integer", "description": "Featured image ID" }
                },
                "required": ["title"]
            }),
        ),
        ToolDefinition::new(
            "wp_update_post",
            "Update an existing post",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "Post ID" },
                    "title": { "type": "string", "description": "Post title" },
                    "content": { "type": "string", "description": "Post content (HTML)" },
                    "status": { "type": "string", "enum": PostStatus::VALUES, "description": "Post status" },
                    "excerpt": { "type": "string", "description": "Post excerpt" },
                    "categories": { "type": "array", "items": { "type": "integer" }, "description": "Category IDs" },
                    "tags": { "type": "array", "items": { "type": "integer" }, "description": "Tag IDs" },
                    "featured_media": { "type": "integer", "description": "Featured image ID" }
                },
                "required": ["id"]
            }),
        ),
        ToolDefinition::new(
            "wp_delete_post",
            "Delete a post (moves to trash, or permanently if force=true)",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "Post ID" },
                    "force": { "type": "boolean", "default": false, "description": "Bypass trash and delete permanently" }
                },
                "required": ["id"]
            }),
        ),
        ToolDefinition::new(
            "wp_search_posts",
            "Search posts by keyword",
            json!({
                "type": "object",
                "properties": {
                    "search": { "type": "string", "description": "Search term" },
                    "per_page": { "type": "integer", "default": 10, "description": "Results per page" }
                },
                "required": ["search"]
            }),
        ),
    ]
}

#[derive(Debug, Deserialize)]
struct ListPostsArgs {
    #[serde(default = "args::per_page_10")]
    per_page: u64,
    #[serde(default = "args::page_one")]
    page: u64,
    #[serde(default)]
    status: Option<PostStatus>,
    #[serde(default)]
    search: Option<String>,
    #[serde(default)]
    categories: Option<String>,
    #[serde(default)]
    tags: Option<String>,
    #[serde(default)]
    author: Option<u64>,
    #[serde(default)]
    orderby: PostOrderBy,
    #[serde(default = "args::desc")]
    order: SortOrder,
}

impl ListPostsArgs {
    fn query(&self) -> Query {
        Query::new()
            .param("per_page", self.per_page)
            .param("page", self.page)
            .opt("status", self.status.map(PostStatus::as_str))
            .opt("search", self.search.as_ref())
            .opt("categories", self.categories.as_ref())
            .opt("tags", self.tags.as_ref())
            .opt("author", self.author)
            .param("orderby", self.orderby.as_str())
            .param("order", self.order.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct GetPostArgs {
    id: u64,
    #[serde(default)]
    content: bool,
}

/// Body of `wp_update_post`; only supplied fields are sent.
#[derive(Debug, Deserialize, Serialize)]
struct PostFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<PostStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    categories: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    featured_media: Option<u64>,
}

#[derive(Debug, Deserialize, Serialize)]
struct CreatePostArgs {
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default)]
    status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    categories: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    featured_media: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct UpdatePostArgs {
    id: u64,
    #[serde(flatten)]
    fields: PostFields,
}

#[derive(Debug, Deserialize)]
struct DeleteArgs {
    id: u64,
    #[serde(default)]
    force: bool,
}

#[derive(Debug, Deserialize)]
struct SearchPostsArgs {
    search: String,
    #[serde(default = "args::per_page_10")]
    per_page: u64,
}

/// Response of a post deletion: trashing returns the post itself, a forced
/// delete wraps it in `previous`.
#[derive(Debug, Deserialize)]
struct DeletedPost {
    #[serde(default)]
    previous: Option<PostSource>,
    #[serde(flatten)]
    current: PostSource,
}

fn project_all(posts: &[PostSource]) -> Vec<ProjectedPost> {
    posts.iter().map(project_post).collect()
}

pub(crate) async fn list_posts(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: ListPostsArgs = parse_args(arguments)?;
    let posts: Vec<PostSource> = client.get(POSTS, &args.query()).await?;
    json_result(&project_all(&posts))
}

pub(crate) async fn get_post(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: GetPostArgs = parse_args(arguments)?;
    let post: PostSource = client
        .get(&format!("{POSTS}/{}", args.id), &Query::new())
        .await?;
    let mut projected = project_post(&post);
    if args.content && post.content.is_some() {
        projected.content = Some(rich_text(post.content.as_ref()).unwrap_or_default());
    }
    json_result(&projected)
}

pub(crate) async fn create_post(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: CreatePostArgs = parse_args(arguments)?;
    let post: PostSource = client.post(POSTS, &args).await?;
    json_result(&project_post(&post))
}

pub(crate) async fn update_post(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: UpdatePostArgs = parse_args(arguments)?;
    let post: PostSource = client
        .put(&format!("{POSTS}/{}", args.id), &args.fields)
        .await?;
    json_result(&project_post(&post))
}

pub(crate) async fn delete_post(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: DeleteArgs = parse_args(arguments)?;
    let query = Query::new().param("force", args::force_flag(args.force));
    let deleted: DeletedPost = client
        .delete(&format!("{POSTS}/{}", args.id), &query)
        .await?;
    let previous = deleted.previous.as_ref().unwrap_or(&deleted.current);
    json_result(&json!({
        "deleted": true,
        "id": args.id,
        "previous": project_post(previous),
    }))
}

pub(crate) async fn search_posts(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: SearchPostsArgs = parse_args(arguments)?;
    let query = Query::new()
        .param("search", &args.search)
        .param("per_page", args.per_page);
    let posts: Vec<PostSource> = client.get(POSTS, &query).await?;
    json_result(&project_all(&posts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_defaults() {
        let args: ListPostsArgs = parse_args(&Value::Null).unwrap();
        assert_eq!(
            args.query().to_query_string(),
            "per_page=10&page=1&orderby=date&order=desc"
        );
    }

    #[test]
    fn list_filters_encoded() {
        let args: ListPostsArgs = parse_args(&json!({
            "status": "publish",
            "categories": "3,4",
            "search": "",
            "order": "asc"
        }))
        .unwrap();
        assert_eq!(
            args.query().to_query_string(),
            "per_page=10&page=1&status=publish&categories=3%2C4&orderby=date&order=asc"
        );
    }

    #[test]
    fn invalid_status_rejected() {
        assert!(parse_args::<ListPostsArgs>(&json!({"status": "published"})).is_err());
    }

    #[test]
    fn create_body_defaults_to_draft() {
        let args: CreatePostArgs =
            parse_args(&json!({"title": "Hello", "tags": [1, 2]})).unwrap();
        let body = serde_json::to_value(&args).unwrap();
        assert_eq!(body, json!({"title": "Hello", "status": "draft", "tags": [1, 2]}));
    }

    #[test]
    fn create_requires_title() {
        assert!(parse_args::<CreatePostArgs>(&json!({"content": "x"})).is_err());
    }

    #[test]
    fn update_body_excludes_id() {
        let args: UpdatePostArgs = parse_args(&json!({"id": 9, "title": "New"})).unwrap();
        assert_eq!(args.id, 9);
        let body = serde_json::to_value(&args.fields).unwrap();
        assert_eq!(body, json!({"title": "New"}));
    }

    #[test]
    fn forced_delete_uses_previous() {
        let deleted: DeletedPost = serde_json::from_value(json!({
            "deleted": true,
            "previous": { "id": 5, "title": { "rendered": "Gone" } }
        }))
        .unwrap();
        let previous = deleted.previous.as_ref().unwrap_or(&deleted.current);
        assert_eq!(project_post(previous).title.as_deref(), Some("Gone"));
    }

    #[test]
    fn trashed_delete_uses_record() {
        let deleted: DeletedPost = serde_json::from_value(json!({
            "id": 5,
            "status": "trash",
            "title": { "rendered": "Trashed" }
        }))
        .unwrap();
        assert!(deleted.previous.is_none());
        assert_eq!(project_post(&deleted.current).status.as_deref(), Some("trash"));
    }
}
