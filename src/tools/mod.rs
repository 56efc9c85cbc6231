//! Tool catalog.
//!
//! Every tool is a name, a description, a JSON Schema served by `tools/list`
//! and a handler. Handlers deserialise their arguments into a typed struct
//! before touching the network, issue one REST request (batch moderation
//! issues several), project the response and return compact JSON text.
//!
//! Tools prefixed `wp_` use the core `/wp/v2` routes. Tools prefixed `mcp_`
//! use `/mcp/v1` routes served by a companion site plugin and pass the
//! response through unchanged.

pub mod args;
pub mod comments;
pub mod extended;
pub mod media;
pub mod pages;
pub mod plugins;
pub mod posts;
pub mod site;
pub mod taxonomies;
pub mod themes;
pub mod users;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::mcp::server::{ToolCallResult, ToolDefinition};
use crate::wordpress::{WpClient, WpError};

/// Error produced by a tool handler.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Arguments did not match the tool's schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The REST request failed.
    #[error(transparent)]
    Api(#[from] WpError),

    /// The result could not be serialised.
    #[error("Failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Outcome of a tool handler: JSON text on success.
pub type ToolOutcome = Result<String, ToolError>;

/// Deserialises tool arguments; a missing argument object counts as `{}`.
pub(crate) fn parse_args<T: DeserializeOwned>(arguments: &Value) -> Result<T, ToolError> {
    let value = if arguments.is_null() {
        Value::Object(serde_json::Map::new())
    } else {
        arguments.clone()
    };
    serde_json::from_value(value).map_err(|e| ToolError::InvalidArguments(e.to_string()))
}

/// Serialises a tool result as compact JSON.
pub(crate) fn json_result<T: Serialize + ?Sized>(value: &T) -> ToolOutcome {
    Ok(serde_json::to_string(value)?)
}

/// Returns the definitions of every tool, in catalog order.
#[must_use]
pub fn definitions() -> Vec<ToolDefinition> {
    let mut all = Vec::new();
    all.extend(site::definitions());
    all.extend(posts::definitions());
    all.extend(pages::definitions());
    all.extend(users::definitions());
    all.extend(plugins::definitions());
    all.extend(themes::definitions());
    all.extend(media::definitions());
    all.extend(taxonomies::definitions());
    all.extend(comments::definitions());
    all.extend(extended::definitions());
    all
}

/// Runs the named tool and wraps its outcome for the protocol layer.
pub async fn call_tool(client: &WpClient, name: &str, arguments: &Value) -> ToolCallResult {
    let outcome = match name {
        // === Site ===
        "wp_site_info" => site::site_info(client).await,
        "wp_get_settings" => site::get_settings(client).await,
        "wp_update_settings" => site::update_settings(client, arguments).await,
        "wp_get_namespaces" => site::get_namespaces(client).await,

        // === Posts ===
        "wp_list_posts" => posts::list_posts(client, arguments).await,
        "wp_get_post" => posts::get_post(client, arguments).await,
        "wp_create_post" => posts::create_post(client, arguments).await,
        "wp_update_post" => posts::update_post(client, arguments).await,
        "wp_delete_post" => posts::delete_post(client, arguments).await,
        "wp_search_posts" => posts::search_posts(client, arguments).await,

        // === Pages ===
        "wp_list_pages" => pages::list_pages(client, arguments).await,
        "wp_get_page" => pages::get_page(client, arguments).await,
        "wp_create_page" => pages::create_page(client, arguments).await,
        "wp_update_page" => pages::update_page(client, arguments).await,
        "wp_delete_page" => pages::delete_page(client, arguments).await,

        // === Users ===
        "wp_list_users" => users::list_users(client, arguments).await,
        "wp_me" => users::me(client).await,
        "wp_get_user" => users::get_user(client, arguments).await,
        "wp_create_user" => users::create_user(client, arguments).await,
        "wp_update_user" => users::update_user(client, arguments).await,
        "wp_delete_user" => users::delete_user(client, arguments).await,

        // === Plugins ===
        "wp_list_plugins" => plugins::list_plugins(client, arguments).await,
        "wp_get_plugin" => plugins::get_plugin(client, arguments).await,
        "wp_activate_plugin" => plugins::activate_plugin(client, arguments).await,
        "wp_deactivate_plugin" => plugins::deactivate_plugin(client, arguments).await,
        "wp_delete_plugin" => plugins::delete_plugin(client, arguments).await,

        // === Themes ===
        "wp_list_themes" => themes::list_themes(client, arguments).await,
        "wp_get_active_theme" => themes::get_active_theme(client).await,
        "wp_get_theme" => themes::get_theme(client, arguments).await,
        "wp_activate_theme" => themes::activate_theme(client, arguments).await,

        // === Media ===
        "wp_list_media" => media::list_media(client, arguments).await,
        "wp_get_media" => media::get_media(client, arguments).await,
        "wp_update_media" => media::update_media(client, arguments).await,
        "wp_delete_media" => media::delete_media(client, arguments).await,

        // === Taxonomies ===
        "wp_list_categories" => taxonomies::list_categories(client, arguments).await,
        "wp_create_category" => taxonomies::create_category(client, arguments).await,
        "wp_update_category" => taxonomies::update_category(client, arguments).await,
        "wp_delete_category" => taxonomies::delete_category(client, arguments).await,
        "wp_list_tags" => taxonomies::list_tags(client, arguments).await,
        "wp_create_tag" => taxonomies::create_tag(client, arguments).await,
        "wp_update_tag" => taxonomies::update_tag(client, arguments).await,
        "wp_delete_tag" => taxonomies::delete_tag(client, arguments).await,

        // === Comments ===
        "wp_list_comments" => comments::list_comments(client, arguments).await,
        "wp_get_comment" => comments::get_comment(client, arguments).await,
        "wp_create_comment" => comments::create_comment(client, arguments).await,
        "wp_update_comment" => comments::update_comment(client, arguments).await,
        "wp_delete_comment" => comments::delete_comment(client, arguments).await,
        "wp_moderate_comments" => comments::moderate(client, arguments).await,

        // === Companion plugin ===
        other if other.starts_with("mcp_") => {
            match extended::call(client, other, arguments).await {
                Some(outcome) => outcome,
                None => return ToolCallResult::error(format!("Unknown tool: {name}")),
            }
        }

        _ => return ToolCallResult::error(format!("Unknown tool: {name}")),
    };

    match outcome {
        Ok(text) => ToolCallResult::text(text),
        Err(e) => {
            warn!(tool = %name, error = %e, "Tool call failed");
            ToolCallResult::error(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::HashSet;

    #[derive(Debug, Deserialize)]
    struct Sample {
        id: u64,
        #[serde(default = "args::per_page_10")]
        per_page: u64,
    }

    #[test]
    fn parse_args_applies_defaults() {
        let parsed: Sample = parse_args(&json!({"id": 4})).unwrap();
        assert_eq!(parsed.id, 4);
        assert_eq!(parsed.per_page, 10);
    }

    #[test]
    fn parse_args_reports_missing_field() {
        let err = parse_args::<Sample>(&Value::Null).unwrap_err();
        assert!(err.to_string().starts_with("Invalid arguments:"));
        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn parse_args_rejects_wrong_type() {
        let err = parse_args::<Sample>(&json!({"id": "four"})).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[test]
    fn json_result_is_compact() {
        let text = json_result(&json!({"a": 1, "b": [1, 2]})).unwrap();
        assert_eq!(text, r#"{"a":1,"b":[1,2]}"#);
    }

    #[test]
    fn api_error_message_passes_through() {
        let err = ToolError::from(WpError::api(404, "not found"));
        assert_eq!(err.to_string(), "WordPress API error 404: not found");
    }

    #[test]
    fn tool_names_are_unique() {
        let defs = definitions();
        let names: HashSet<_> = defs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names.len(), defs.len());
    }

    #[test]
    fn every_schema_is_an_object() {
        for def in definitions() {
            assert_eq!(def.input_schema["type"], "object", "{}", def.name);
            assert!(def.description.is_some(), "{}", def.name);
            assert!(
                def.name.starts_with("wp_") || def.name.starts_with("mcp_"),
                "{}",
                def.name
            );
        }
    }

    fn collect_types<'a>(schema: &'a Value, found: &mut Vec<&'a str>) {
        match schema {
            Value::Object(map) => {
                if let Some(kind) = map.get("type").and_then(Value::as_str) {
                    found.push(kind);
                }
                map.values().for_each(|v| collect_types(v, found));
            }
            Value::Array(items) => items.iter().for_each(|v| collect_types(v, found)),
            _ => {}
        }
    }

    #[test]
    fn numeric_properties_are_integers() {
        for def in definitions() {
            let mut types = Vec::new();
            collect_types(&def.input_schema, &mut types);
            assert!(!types.contains(&"number"), "{} advertises a float", def.name);
        }
    }

    #[test]
    fn required_fields_are_declared_properties() {
        for def in definitions() {
            let Some(required) = def.input_schema.get("required").and_then(Value::as_array) else {
                continue;
            };
            for field in required {
                let field = field.as_str().unwrap();
                assert!(
                    def.input_schema["properties"].get(field).is_some(),
                    "{}: {field}",
                    def.name
                );
            }
        }
    }
}
