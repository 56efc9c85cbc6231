//! Category and tag tools.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::args;
use super::{json_result, parse_args, ToolOutcome};
use crate::mcp::server::ToolDefinition;
use crate::projection::{
    project_category, project_tag, CategorySource, ProjectedCategory, ProjectedTag, TagSource,
};
use crate::wordpress::{Query, WpClient};

const CATEGORIES: &str = "/wp/v2/categories";
const TAGS: &str = "/wp/v2/tags";

fn id_schema(what: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "id": { "type": "integer", "description": format!("{what} ID") }
        },
        "required": ["id"]
    })
}

pub(crate) fn definitions() -> Vec<ToolDefinition> {
    vec![
        // === Categories ===
        ToolDefinition::new(
            "wp_list_categories",
            "List all categories",
            json!({
                "type": "object",
                "properties": {
                    "per_page": { "type": "integer", "default": 100, "description": "Categories per page" },
                    "parent": { "type": "integer", "description": "Parent category ID (0 for top-level)" },
                    "hide_empty": { "type": "boolean", "default": false, "description": "Hide categories with no posts" }
                }
            }),
        ),
        ToolDefinition::new(
            "wp_create_category",
            "Create a new category",
            json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Category name" },
                    "slug": { "type": "string", "description": "URL slug" },
                    "parent": { "type": "integer", "default": 0, "description": "Parent category ID" },
                    "description": { "type": "string", "description": "Description" }
                },
                "required": ["name"]
            }),
        ),
        ToolDefinition::new(
            "wp_update_category",
            "Update a category",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "Category ID" },
                    "name": { "type": "string", "description": "Category name" },
                    "slug": { "type": "string", "description": "URL slug" },
                    "parent": { "type": "integer", "description": "Parent category ID" },
                    "description": { "type": "string", "description": "Description" }
                },
                "required": ["id"]
            }),
        ),
        ToolDefinition::new("wp_delete_category", "Delete a category", id_schema("Category")),
        // === Tags ===
        ToolDefinition::new(
            "wp_list_tags",
            "List all tags",
            json!({
                "type": "object",
                "properties": {
                    "per_page": { "type": "integer", "default": 100, "description": "Tags per page" },
                    "search": { "type": "string", "description": "Search term" },
                    "hide_empty": { "type": "boolean", "default": false, "description": "Hide tags with no posts" }
                }
            }),
        ),
        ToolDefinition::new(
            "wp_create_tag",
            "Create a new tag",
            json!({
                "type": "object",
                "properties": {
                    "name": { "type": "string", "description": "Tag name" },
                    "slug": { "type": "string", "description": "URL slug" },
                    "description": { "type": "string", "description": "Description" }
                },
                "required": ["name"]
            }),
        ),
        ToolDefinition::new(
            "wp_update_tag",
            "Update a tag",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "Tag ID" },
                    "name": { "type": "string", "description": "Tag name" },
                    "slug": { "type": "string", "description": "URL slug" },
                    "description": { "type": "string", "description": "Description" }
                },
                "required": ["id"]
            }),
        ),
        ToolDefinition::new("wp_delete_tag", "Delete a tag", id_schema("Tag")),
    ]
}

#[derive(Debug, Deserialize)]
struct ListCategoriesArgs {
    #[serde(default = "args::per_page_100")]
    per_page: u64,
    #[serde(default)]
    parent: Option<u64>,
    #[serde(default)]
    hide_empty: bool,
}

impl ListCategoriesArgs {
    fn query(&self) -> Query {
        Query::new()
            .param("per_page", self.per_page)
            .opt("parent", self.parent)
            .opt("hide_empty", self.hide_empty.then_some(1_u32))
    }
}

#[derive(Debug, Deserialize)]
struct ListTagsArgs {
    #[serde(default = "args::per_page_100")]
    per_page: u64,
    #[serde(default)]
    search: Option<String>,
    #[serde(default)]
    hide_empty: bool,
}

impl ListTagsArgs {
    fn query(&self) -> Query {
        Query::new()
            .param("per_page", self.per_page)
            .opt("search", self.search.as_ref())
            .opt("hide_empty", self.hide_empty.then_some(1_u32))
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct CreateCategoryArgs {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    #[serde(default)]
    parent: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
struct CreateTagArgs {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

/// Update body shared by categories and tags; `parent` only applies to categories.
#[derive(Debug, Deserialize, Serialize)]
struct TermFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parent: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateTermArgs {
    id: u64,
    #[serde(flatten)]
    fields: TermFields,
}

#[derive(Debug, Deserialize)]
struct IdArgs {
    id: u64,
}

async fn delete_term(client: &WpClient, base: &str, arguments: &Value) -> ToolOutcome {
    let args: IdArgs = parse_args(arguments)?;
    let query = Query::new().param("force", args::force_flag(true));
    let _: Value = client.delete(&format!("{base}/{}", args.id), &query).await?;
    json_result(&json!({ "deleted": true, "id": args.id }))
}

pub(crate) async fn list_categories(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: ListCategoriesArgs = parse_args(arguments)?;
    let categories: Vec<CategorySource> = client.get(CATEGORIES, &args.query()).await?;
    let projected: Vec<ProjectedCategory> = categories.iter().map(project_category).collect();
    json_result(&projected)
}

pub(crate) async fn create_category(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: CreateCategoryArgs = parse_args(arguments)?;
    let category: CategorySource = client.post(CATEGORIES, &args).await?;
    json_result(&project_category(&category))
}

pub(crate) async fn update_category(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: UpdateTermArgs = parse_args(arguments)?;
    let category: CategorySource = client
        .put(&format!("{CATEGORIES}/{}", args.id), &args.fields)
        .await?;
    json_result(&project_category(&category))
}

pub(crate) async fn delete_category(client: &WpClient, arguments: &Value) -> ToolOutcome {
    delete_term(client, CATEGORIES, arguments).await
}

pub(crate) async fn list_tags(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: ListTagsArgs = parse_args(arguments)?;
    let tags: Vec<TagSource> = client.get(TAGS, &args.query()).await?;
    let projected: Vec<ProjectedTag> = tags.iter().map(project_tag).collect();
    json_result(&projected)
}

pub(crate) async fn create_tag(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: CreateTagArgs = parse_args(arguments)?;
    let tag: TagSource = client.post(TAGS, &args).await?;
    json_result(&project_tag(&tag))
}

pub(crate) async fn update_tag(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let mut args: UpdateTermArgs = parse_args(arguments)?;
    args.fields.parent = None;
    let tag: TagSource = client
        .put(&format!("{TAGS}/{}", args.id), &args.fields)
        .await?;
    json_result(&project_tag(&tag))
}

pub(crate) async fn delete_tag(client: &WpClient, arguments: &Value) -> ToolOutcome {
    delete_term(client, TAGS, arguments).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hide_empty_only_when_requested() {
        let args: ListCategoriesArgs = parse_args(&json!({})).unwrap();
        assert_eq!(args.query().to_query_string(), "per_page=100");

        let args: ListCategoriesArgs =
            parse_args(&json!({"parent": 0, "hide_empty": true})).unwrap();
        assert_eq!(args.query().to_query_string(), "per_page=100&parent=0&hide_empty=1");
    }

    #[test]
    fn tag_search_dropped_when_empty() {
        let args: ListTagsArgs = parse_args(&json!({"search": "", "per_page": 5})).unwrap();
        assert_eq!(args.query().to_query_string(), "per_page=5");
    }

    #[test]
    fn create_category_defaults_parent() {
        let args: CreateCategoryArgs = parse_args(&json!({"name": "News"})).unwrap();
        let body = serde_json::to_value(&args).unwrap();
        assert_eq!(body, json!({"name": "News", "parent": 0}));
    }
}
