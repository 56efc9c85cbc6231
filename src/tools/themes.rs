//! Theme tools.

use serde::Deserialize;
use serde_json::{json, Value};

use super::args::ActivationStatus;
use super::{json_result, parse_args, ToolOutcome};
use crate::mcp::server::ToolDefinition;
use crate::projection::{project_theme, ProjectedTheme, SettingsSource, ThemeSource};
use crate::wordpress::{encode_segment, Query, WpClient};

const THEMES: &str = "/wp/v2/themes";

pub(crate) fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            "wp_list_themes",
            "List all installed themes",
            json!({
                "type": "object",
                "properties": {
                    "status": { "type": "string", "enum": ["active", "inactive"], "description": "Filter by status" }
                }
            }),
        ),
        ToolDefinition::new(
            "wp_get_active_theme",
            "Get the currently active theme",
            json!({ "type": "object", "properties": {} }),
        ),
        ToolDefinition::new(
            "wp_get_theme",
            "Get theme details by stylesheet name",
            json!({
                "type": "object",
                "properties": {
                    "stylesheet": { "type": "string", "description": "Theme stylesheet (folder name)" }
                },
                "required": ["stylesheet"]
            }),
        ),
        ToolDefinition::new(
            "wp_activate_theme",
            "Activate a theme (switch themes)",
            json!({
                "type": "object",
                "properties": {
                    "stylesheet": { "type": "string", "description": "Theme stylesheet (folder name) to activate" }
                },
                "required": ["stylesheet"]
            }),
        ),
    ]
}

#[derive(Debug, Deserialize)]
struct ListThemesArgs {
    #[serde(default)]
    status: Option<ActivationStatus>,
}

#[derive(Debug, Deserialize)]
struct StylesheetArgs {
    stylesheet: String,
}

pub(crate) async fn list_themes(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: ListThemesArgs = parse_args(arguments)?;
    let query = Query::new().opt("status", args.status.map(ActivationStatus::as_str));
    let themes: Vec<ThemeSource> = client.get(THEMES, &query).await?;
    let projected: Vec<ProjectedTheme> = themes.iter().map(project_theme).collect();
    json_result(&projected)
}

pub(crate) async fn get_active_theme(client: &WpClient) -> ToolOutcome {
    let query = Query::new().param("status", ActivationStatus::Active.as_str());
    let themes: Vec<ThemeSource> = client.get(THEMES, &query).await?;
    match themes.first() {
        Some(theme) => json_result(&project_theme(theme)),
        None => json_result(&json!({ "error": "No active theme found" })),
    }
}

pub(crate) async fn get_theme(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: StylesheetArgs = parse_args(arguments)?;
    let theme: ThemeSource = client
        .get(
            &format!("{THEMES}/{}", encode_segment(&args.stylesheet)),
            &Query::new(),
        )
        .await?;
    json_result(&project_theme(&theme))
}

/// Switches themes by writing the `stylesheet` site setting.
pub(crate) async fn activate_theme(client: &WpClient, arguments: &Value) -> ToolOutcome {
    let args: StylesheetArgs = parse_args(arguments)?;
    let settings: SettingsSource = client
        .post("/wp/v2/settings", &json!({ "stylesheet": args.stylesheet }))
        .await?;
    json_result(&json!({
        "activated": args.stylesheet,
        "current_stylesheet": settings.stylesheet,
    }))
}
