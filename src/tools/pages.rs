//! Page tools.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::args::{self, PageOrderBy, PostStatus, SortOrder};
use super::{json_result, parse_args, ToolOutcome};
use crate::mcp::server::ToolDefinition;
use crate::projection::{project_page, rich_text, PageSource, ProjectedPage};
use crate::wordpress::{Query, WpClient};

const PAGES: &str = "/wp/v2/pages";

pub(crate) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "wp_list_pages",
            "List WordPress pages",
            json!({
                "type": "object",
                "properties": {
                    "per_page": { "type": "integer", "default": 20, "description": "Pages per request (max 100)" },
                    "page": { "type": "integer", "default": 1, "description": "Page number" },
                    "status": { "type": "string", "enum": PostStatus::VALUES, "description": "Page status filter" },
                    "parent": { "type": "integer", "description": "Parent page ID (0 for top-level)" },
                    "orderby": { "type": "string", "enum": ["date", "title", "modified", "menu_order"], "default": "menu_order" },
                    "order": { "type": "string", "enum": ["asc", "desc"], "default": "asc" }
                }
            }),
        ),
        ToolDefinition::new(
            "wp_get_page",
            "Get a single page by ID",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "Page ID" },
                    "content": { "type": "boolean", "default": false, "description": "Include full content" }
                },
                "required": ["id"]
            }),
        ),
        ToolDefinition::new(
            "wp_create_page",
            "Create a new WordPress page",
            json!({
                "type": "object",
                "properties": {
                    "title": { "type": "string", "description": "Page title" },
                    "content": { "type": "string", "description": "Page content (HTML)" },
                    "status": { "type": "string", "enum": PostStatus::VALUES, "default": "draft", "description": "Page status" },
                    "parent": { "type": "integer", "default": 0, "description": "Parent page ID" },
                    "menu_order": { "type": "integer", "default": 0, "description": "Menu order" }
                },
                "required": ["title"]
            }),
        ),
        ToolDefinition::new(
            "wp_update_page",
            "Update an existing page",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "Page ID" },
                    "title": { "type": "string", "description": "Page title" },
                    "content": { "type": "string", "description": "Page content (HTML)" },
                    "status": { "type": "string", "enum": PostStatus::VALUES, "description": "Page status" },
                    "parent": { "type": "integer", "description": "Parent page ID" },
                    "menu_order": { "type": "integer", "description": "Menu order" }
                },
                "required": ["id"]
            }),
        ),
        ToolDefinition::new(
            "wp_delete_page",
            "Delete a page (moves to trash, or permanently if force=true)",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "Page ID" },
                    "force": { "type": "boolean", "default": false, "description": "Bypass trash and delete permanently" }
                },
                "required": ["id"]
            }),
        ),
    ]
}

#[derive(Debug, Deserialize)]
struct ListPagesArgs {
    #[serde(default = "args::per_page_20")]
    per_page: u64,
    #[serde(default = "args::page_one")]
    page: u64,
    #[serde(default)]
    status: Option<PostStatus>,
    #[serde(default)]
    parent: Option<u64>,
    #[serde(default)]
    orderby: PageOrderBy,
    #[serde(default = "args::asc")]
    order: SortOrder,
}

impl ListPagesArgs {
    fn query(&self) -> Query {
        Query::new()
            .param("per_page", self.per_page)
            .param("page", self.page)
            .opt("status", self.status.map(PostStatus::as_str))
            .opt("parent", self.parent)
            .param("orderby", self.orderby.as_str())
            .param("order", self.order.as_str())
    }
}

#[derive(Debug, Deserialize)]
struct GetPageArgs {
    id: u64,
    #[serde(default)]
    content: bool,
}

#[derive(Debug, Deserialize, Serialize)]
struct CreatePageArgs {
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default)]
    status: PostStatus,
    #[serde(default)]
    parent: u64,
    #[serde(default)]
    menu_order: i64,
}

#[derive(Debug, Deserialize, Serialize)]
struct PageFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<PostStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    menu_order: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct UpdatePageArgs {
    id: u64,
    #[serde(flatten)]
    fields: PageFields,
}

#[derive(Debug, Deserialize)]
struct DeletePageArgs {
    id: u64,
    #[serde(default)]
    force: bool,
}

pub(crate) async fn list_pages(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: ListPagesArgs = parse_args(arguments)?;
    let pages: Vec<PageSource> = client.get(PAGES, &args.query()).await?;
    let projected: Vec<ProjectedPage> = pages.iter().map(project_page).collect();
    json_result(&projected)
}

pub(crate) async fn get_page(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: GetPageArgs = parse_args(arguments)?;
    let page: PageSource = client
        .get(&format!("{PAGES}/{}", args.id), &Query::new())
        .await?;
    let mut projected = project_page(&page);
    if args.content && page.content.is_some() {
        projected.content = Some(rich_text(page.content.as_ref()).unwrap_or_default());
    }
    json_result(&projected)
}

pub(crate) async fn create_page(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: CreatePageArgs = parse_args(arguments)?;
    let page: PageSource = client.post(PAGES, &args).await?;
    json_result(&project_page(&page))
}

pub(crate) async fn update_page(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: UpdatePageArgs = parse_args(arguments)?;
    let page: PageSource = client
        .put(&format!("{PAGES}/{}", args.id), &args.fields)
        .await?;
    json_result(&project_page(&page))
}

pub(crate) async fn delete_page(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: DeletePageArgs = parse_args(arguments)?;
    let query = Query::new().param("force", args::force_flag(args.force));
    let _: Value = client
        .delete(&format!("{PAGES}/{}", args.id), &query)
        .await?;
    json_result(&json!({ "deleted": true, "id": args.id }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_defaults() {
        let args: ListPagesArgs = parse_args(&json!({})).unwrap();
        assert_eq!(
            args.query().to_query_string(),
            "per_page=20&page=1&orderby=menu_order&order=asc"
        );
    }

    #[test]
    fn top_level_parent_is_sent() {
        let args: ListPagesArgs = parse_args(&json!({"parent": 0})).unwrap();
        assert!(args.query().to_query_string().contains("parent=0"));
    }

    #[test]
    fn create_body_defaults() {
        let args: CreatePageArgs = parse_args(&json!({"title": "About"})).unwrap();
        let body = serde_json::to_value(&args).unwrap();
        assert_eq!(
            body,
            json!({"title": "About", "status": "draft", "parent": 0, "menu_order": 0})
        );
    }
}
