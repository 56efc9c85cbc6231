//! Site health, diagnostics and cron.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::{empty_schema, get, post};
use crate::mcp::server::ToolDefinition;
use crate::tools::{parse_args, ToolOutcome};
use crate::wordpress::{Query, WpClient};

/// Read-only diagnostics: `(tool name, description, route)`.
const REPORTS: [(&str, &str, &str); 5] = [
    ("mcp_get_health", "Get site health status and score", "/health"),
    ("mcp_get_debug_info", "Get detailed debug information", "/health/debug"),
    ("mcp_get_php_info", "Get PHP configuration details", "/health/php"),
    (
        "mcp_get_plugins_health",
        "Get plugin health status and available updates",
        "/health/plugins",
    ),
    ("mcp_get_cron_status", "Get WordPress cron jobs status", "/health/cron"),
];

pub(super) fn definitions() -> Vec<ToolDefinition> {
    let mut defs: Vec<ToolDefinition> = REPORTS
        .iter()
        .map(|(name, description, _)| ToolDefinition::new(name, description, empty_schema()))
        .collect();
    defs.push(ToolDefinition::new(
        "mcp_run_cron",
        "Manually trigger a cron hook",
        json!({
            "type": "object",
            "properties": {
                "hook": { "type": "string", "description": "Cron hook name to run" }
            },
            "required": ["hook"]
        }),
    ));
    defs
}

#[derive(Debug, Deserialize, Serialize)]
struct RunCronArgs {
    hook: String,
}

pub(super) async fn call(client: &WpClient, name: &str, arguments: &Value) -> Option<ToolOutcome> {
    if name == "mcp_run_cron" {
        return Some(run_cron(client, arguments).await);
    }
    let &(_, _, path) = REPORTS.iter().find(|(tool, ..)| *tool == name)?;
    Some(get(client, path, &Query::new()).await)
}

async fn run_cron(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: RunCronArgs = parse_args(arguments)?;
    post(client, "/health/cron/run", &args).await
}
