//! User tools.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

use super::args;
use super::{json_result, parse_args, ToolOutcome};
use crate::mcp::server::ToolDefinition;
use crate::projection::{project_user, ProjectedUser, UserSource};
use crate::wordpress::{Query, WpClient};

const USERS: &str = "/wp/v2/users";

pub(crate) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "wp_list_users",
            "List WordPress users",
            json!({
                "type": "object",
                "properties": {
                    "per_page": { "type": "integer", "default": 20, "description": "Users per page (max 100)" },
                    "page": { "type": "integer", "default": 1, "description": "Page number" },
                    "roles": { "type": "string", "description": "Filter by role(s), comma-separated" },
                    "search": { "type": "string", "description": "Search by name or email" }
                }
            }),
        ),
        ToolDefinition::new(
            "wp_me",
            "Get the currently authenticated user",
            json!({ "type": "object", "properties": {} }),
        ),
        ToolDefinition::new(
            "wp_get_user",
            "Get a user by ID",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "User ID" }
                },
                "required": ["id"]
            }),
        ),
        ToolDefinition::new(
            "wp_create_user",
            "Create a new WordPress user",
            json!({
                "type": "object",
                "properties": {
                    "username": { "type": "string", "description": "Username (login name)" },
                    "email": { "type": "string", "format": "email", "description": "Email address" },
                    "password": { "type": "string", "description": "Password" },
                    "name": { "type": "string", "description": "Display name" },
                    "roles": { "type": "array", "items": { "type": "string" }, "description": "Roles (e.g., ['editor'])" }
                },
                "required": ["username", "email", "password"]
            }),
        ),
        ToolDefinition::new(
            "wp_update_user",
            "Update an existing user",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "User ID" },
                    "email": { "type": "string", "format": "email", "description": "Email address" },
                    "name": { "type": "string", "description": "Display name" },
                    "roles": { "type": "array", "items": { "type": "string" }, "description": "Roles" },
                    "password": { "type": "string", "description": "New password" }
                },
                "required": ["id"]
            }),
        ),
        ToolDefinition::new(
            "wp_delete_user",
            "Delete a user (requires reassign parameter)",
            json!({
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "description": "User ID to delete" },
                    "reassign": { "type": "integer", "description": "User ID to reassign content to" }
                },
                "required": ["id", "reassign"]
            }),
        ),
    ]
}

/// Checks the address has a non-empty local part and a dotted domain.
fn is_plausible_email(address: &str) -> bool {
    match address.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !address.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn email<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let address = String::deserialize(deserializer)?;
    if is_plausible_email(&address) {
        Ok(address)
    } else {
        Err(serde::de::Error::custom(format!("invalid email address: {address}")))
    }
}

fn optional_email<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    email(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
struct ListUsersArgs {
    #[serde(default = "args::per_page_20")]
    per_page: u64,
    #[serde(default = "args::page_one")]
    page: u64,
    #[serde(default)]
    roles: Option<String>,
    #[serde(default)]
    search: Option<String>,
}

#[derive(Debug, Deserialize)]
struct IdArgs {
    id: u64,
}

#[derive(Debug, Deserialize, Serialize)]
struct CreateUserArgs {
    username: String,
    #[serde(deserialize_with = "email")]
    email: String,
    password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    roles: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Serialize)]
struct UserFields {
    #[serde(
        default,
        deserialize_with = "optional_email",
        skip_serializing_if = "Option::is_none"
    )]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    roles: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    password: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateUserArgs {
    id: u64,
    #[serde(flatten)]
    fields: UserFields,
}

#[derive(Debug, Deserialize)]
struct DeleteUserArgs {
    id: u64,
    reassign: u64,
}

pub(crate) async fn list_users(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: ListUsersArgs = parse_args(arguments)?;
    let query = Query::new()
        .param("per_page", args.per_page)
        .param("page", args.page)
        .opt("roles", args.roles.as_ref())
        .opt("search", args.search.as_ref());
    let users: Vec<UserSource> = client.get(USERS, &query).await?;
    let projected: Vec<ProjectedUser> = users.iter().map(project_user).collect();
    json_result(&projected)
}

pub(crate) async fn me(client: &WpClient) -> ToolOutcome {
    let user: UserSource = client.get(&format!("{USERS}/me"), &Query::new()).await?;
    json_result(&project_user(&user))
}

pub(crate) async fn get_user(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: IdArgs = parse_args(arguments)?;
    let user: UserSource = client
        .get(&format!("{USERS}/{}", args.id), &Query::new())
        .await?;
    json_result(&project_user(&user))
}

pub(crate) async fn create_user(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: CreateUserArgs = parse_args(arguments)?;
    let user: UserSource = client.post(USERS, &args).await?;
    json_result(&project_user(&user))
}

pub(crate) async fn update_user(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: UpdateUserArgs = parse_args(arguments)?;
    let user: UserSource = client
        .put(&format!("{USERS}/{}", args.id), &args.fields)
        .await?;
    json_result(&project_user(&user))
}

pub(crate) async fn delete_user(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: DeleteUserArgs = parse_args(arguments)?;
    let query = Query::new()
        .param("reassign", args.reassign)
        .param("force", args::force_flag(true));
    let _: Value = client
        .delete(&format!("{USERS}/{}", args.id), &query)
        .await?;
    json_result(&json!({
        "deleted": true,
        "id": args.id,
        "reassigned_to": args.reassign,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_check() {
        assert!(is_plausible_email("jane@example.com"));
        assert!(!is_plausible_email("jane.example.com"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("jane@localhost"));
        assert!(!is_plausible_email("jane doe@example.com"));
    }

    #[test]
    fn create_rejects_bad_email() {
        let err = parse_args::<CreateUserArgs>(&json!({
            "username": "jane",
            "email": "not-an-email",
            "password": "pw"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("invalid email"));
    }

    #[test]
    fn update_email_optional() {
        let args: UpdateUserArgs = parse_args(&json!({"id": 3, "name": "Jane"})).unwrap();
        assert!(args.fields.email.is_none());
        assert!(parse_args::<UpdateUserArgs>(&json!({"id": 3, "email": "x"})).is_err());
    }
}
