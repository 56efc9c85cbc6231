//! Tools backed by the companion site plugin's `/mcp/v1` routes.
//!
//! These routes cover what the core REST API cannot do (installing from the
//! plugin directory, database maintenance, options, menus, widgets, health).
//! Responses are already compact and are passed through unprojected.

mod database;
mod health;
mod menus;
mod options;
mod plugins;
mod site_core;
mod themes;
mod widgets;

use serde::Serialize;
use serde_json::{json, Value};

use super::{json_result, ToolOutcome};
use crate::mcp::server::ToolDefinition;
use crate::wordpress::{Query, WpClient};

/// Route prefix of the companion plugin.
pub const NAMESPACE: &str = "/mcp/v1";

pub(crate) fn definitions() -> Vec<ToolDefinition> {
    let mut all = Vec::new();
    all.extend(plugins::definitions());
    all.extend(themes::definitions());
    all.extend(site_core::definitions());
    all.extend(database::definitions());
    all.extend(options::definitions());
    all.extend(menus::definitions());
    all.extend(widgets::definitions());
    all.extend(health::definitions());
    all
}

/// Runs an `mcp_` tool, or returns `None` if no such tool exists.
pub(crate) async fn call(client: &WpClient, name: &str, arguments: &Value) -> Option<ToolOutcome> {
    if let Some(outcome) = plugins::call(client, name, arguments).await {
        return Some(outcome);
    }
    if let Some(outcome) = themes::call(client, name, arguments).await {
        return Some(outcome);
    }
    if let Some(outcome) = site_core::call(client, name).await {
        return Some(outcome);
    }
    if let Some(outcome) = database::call(client, name, arguments).await {
        return Some(outcome);
    }
    if let Some(outcome) = options::call(client, name, arguments).await {
        return Some(outcome);
    }
    if let Some(outcome) = menus::call(client, name, arguments).await {
        return Some(outcome);
    }
    if let Some(outcome) = widgets::call(client, name, arguments).await {
        return Some(outcome);
    }
    health::call(client, name, arguments).await
}

fn empty_schema() -> Value {
    json!({ "type": "object", "properties": {} })
}

fn route(path: &str) -> String {
    format!("{NAMESPACE}{path}")
}

async fn get(client: &WpClient, path: &str, query: &Query) -> ToolOutcome {
    let result: Value = client.get(&route(path), query).await?;
    json_result(&result)
}

async fn post<B: Serialize + ?Sized>(client: &WpClient, path: &str, body: &B) -> ToolOutcome {
    let result: Value = client.post(&route(path), body).await?;
    json_result(&result)
}

async fn put<B: Serialize + ?Sized>(client: &WpClient, path: &str, body: &B) -> ToolOutcome {
    let result: Value = client.put(&route(path), body).await?;
    json_result(&result)
}

async fn delete(client: &WpClient, path: &str, query: &Query) -> ToolOutcome {
    let result: Value = client.delete(&route(path), query).await?;
    json_result(&result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_extended_tool_is_prefixed() {
        for def in definitions() {
            assert!(def.name.starts_with("mcp_"), "{}", def.name);
        }
    }

    #[test]
    fn routes_are_namespaced() {
        assert_eq!(route("/core/version"), "/mcp/v1/core/version");
    }
}
