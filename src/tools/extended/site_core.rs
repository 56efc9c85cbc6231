//! Core version, updates and cache maintenance.

use serde_json::json;

use super::{empty_schema, get, post};
use crate::mcp::server::ToolDefinition;
use crate::tools::ToolOutcome;
use crate::wordpress::{Query, WpClient};

/// `(tool name, description, route, is_write)`
const TOOLS: [(&str, &str, &str, bool); 6] = [
    (
        "mcp_get_version",
        "Get WordPress version and update status",
        "/core/version",
        false,
    ),
    (
        "mcp_get_system_info",
        "Get comprehensive system information",
        "/core/system-info",
        false,
    ),
    (
        "mcp_check_updates",
        "Check for WordPress core, plugin, and theme updates",
        "/core/check-updates",
        true,
    ),
    (
        "mcp_update_core",
        "Update WordPress to the latest version",
        "/core/update",
        true,
    ),
    (
        "mcp_flush_rewrite",
        "Flush permalink rewrite rules",
        "/core/flush-rewrite",
        true,
    ),
    (
        "mcp_flush_cache",
        "Clear all caches and transients",
        "/core/flush-cache",
        true,
    ),
];

pub(super) fn definitions() -> Vec<ToolDefinition> {
    TOOLS
        .iter()
        .map(|(name, description, _, _)| ToolDefinition::new(name, description, empty_schema()))
        .collect()
}

pub(super) async fn call(client: &WpClient, name: &str) -> Option<ToolOutcome> {
    let &(_, _, path, is_write) = TOOLS.iter().find(|(tool, ..)| *tool == name)?;
    let outcome = if is_write {
        post(client, path, &json!({})).await
    } else {
        get(client, path, &Query::new()).await
    };
    Some(outcome)
}
